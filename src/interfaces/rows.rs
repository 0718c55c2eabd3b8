//! Display records shared by the CSV and JSON writers.
//!
//! Amounts are rounded to cents and months render as `YYYY-MM`.

use crate::application::comparison::Comparison;
use crate::application::report::YearSummary;
use crate::domain::money::to_cents;
use crate::domain::schedule::ScheduleEntry;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MonthRow {
    pub month: String,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub extra: Decimal,
    pub balance: Decimal,
    pub home_value: Option<Decimal>,
    pub equity: Option<Decimal>,
}

impl From<&ScheduleEntry> for MonthRow {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            month: month_label(entry.date),
            payment: to_cents(entry.payment),
            principal: to_cents(entry.principal),
            interest: to_cents(entry.interest),
            extra: to_cents(entry.extra),
            balance: to_cents(entry.balance),
            home_value: entry.home_value.map(to_cents),
            equity: entry.equity.map(to_cents),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct YearRow {
    pub year: i32,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub extra: Decimal,
    pub balance: Decimal,
    pub equity: Option<Decimal>,
}

impl From<&YearSummary> for YearRow {
    fn from(summary: &YearSummary) -> Self {
        Self {
            year: summary.year,
            payment: to_cents(summary.payment),
            principal: to_cents(summary.principal),
            interest: to_cents(summary.interest),
            extra: to_cents(summary.extra),
            balance: to_cents(summary.closing_balance),
            equity: summary.closing_equity.map(to_cents),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SummaryRow {
    pub standard_payment: Decimal,
    pub original_payoff: String,
    pub new_payoff: String,
    pub months_saved: i64,
    pub baseline_interest: Decimal,
    pub actual_interest: Decimal,
    pub interest_savings: Decimal,
    pub final_equity: Option<Decimal>,
}

impl From<&Comparison> for SummaryRow {
    fn from(comparison: &Comparison) -> Self {
        Self {
            standard_payment: to_cents(comparison.actual.standard_payment),
            original_payoff: month_label(comparison.baseline.payoff_date),
            new_payoff: month_label(comparison.actual.payoff_date),
            months_saved: comparison.months_saved(),
            baseline_interest: to_cents(comparison.baseline.total_interest),
            actual_interest: to_cents(comparison.actual.total_interest),
            interest_savings: to_cents(comparison.interest_savings()),
            final_equity: comparison.actual.final_equity.map(to_cents),
        }
    }
}
