use crate::application::comparison::Comparison;
use crate::application::report::YearSummary;
use crate::domain::schedule::ScheduleResult;
use crate::error::Result;
use crate::interfaces::rows::{MonthRow, SummaryRow, YearRow};
use serde::Serialize;
use std::io::Write;

fn write_pretty<W: Write, T: Serialize + ?Sized>(mut sink: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, value)?;
    writeln!(sink)?;
    Ok(())
}

pub fn write_months<W: Write>(sink: W, schedule: &ScheduleResult) -> Result<()> {
    let rows: Vec<MonthRow> = schedule.entries.iter().map(MonthRow::from).collect();
    write_pretty(sink, &rows)
}

pub fn write_years<W: Write>(sink: W, years: &[YearSummary]) -> Result<()> {
    let rows: Vec<YearRow> = years.iter().map(YearRow::from).collect();
    write_pretty(sink, &rows)
}

pub fn write_summary<W: Write>(sink: W, comparison: &Comparison) -> Result<()> {
    write_pretty(sink, &SummaryRow::from(comparison))
}
