pub mod rule_reader;
pub mod schedule_writer;
