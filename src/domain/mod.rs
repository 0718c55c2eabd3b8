//! Domain types for fixed-rate mortgage schedules.

pub mod loan;
pub mod money;
pub mod month;
pub mod rule;
pub mod schedule;
