//! Calendar-month helpers.
//!
//! Schedules run at month precision: every date that enters the engine is
//! normalised to the first day of its month, and iteration advances one
//! calendar month at a time.

use crate::error::{MortgageError, Result};
use chrono::{Datelike, Months, NaiveDate};

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

/// Returns the first day of the month following `date`.
pub fn next_month(date: NaiveDate) -> Result<NaiveDate> {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .ok_or_else(|| MortgageError::InvalidDate(format!("no month after {date}")))
}

/// Parses `YYYY-MM` or `YYYY-MM-DD` into the first day of that month.
pub fn parse_month(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d"))
        .map(first_of_month)
        .map_err(|e| MortgageError::InvalidDate(format!("'{input}': {e}")))
}
