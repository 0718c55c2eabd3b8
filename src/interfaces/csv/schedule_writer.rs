use crate::application::comparison::Comparison;
use crate::application::report::YearSummary;
use crate::domain::schedule::ScheduleResult;
use crate::error::Result;
use crate::interfaces::rows::{MonthRow, SummaryRow, YearRow};
use std::io::Write;

/// Writes schedules and their summaries as CSV.
pub struct ScheduleWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ScheduleWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// One row per month of `schedule`.
    pub fn write_months(&mut self, schedule: &ScheduleResult) -> Result<()> {
        for entry in &schedule.entries {
            self.writer.serialize(MonthRow::from(entry))?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// One row per calendar year.
    pub fn write_years(&mut self, years: &[YearSummary]) -> Result<()> {
        for year in years {
            self.writer.serialize(YearRow::from(year))?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// A single row comparing the baseline and accelerated schedules.
    pub fn write_summary(&mut self, comparison: &Comparison) -> Result<()> {
        self.writer.serialize(SummaryRow::from(comparison))?;
        self.writer.flush()?;
        Ok(())
    }
}
