use crate::domain::schedule::{ScheduleEntry, ScheduleResult};
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

/// Groups runs of consecutive items sharing a key and folds each run into a
/// summary.
///
/// Items with equal keys that are not adjacent form separate groups.
pub fn group_consecutive_by<T, K, S>(
    items: &[T],
    key: impl Fn(&T) -> K,
    mut summarize: impl FnMut(K, &[T]) -> S,
) -> Vec<S>
where
    K: PartialEq,
{
    items
        .chunk_by(|a, b| key(a) == key(b))
        .map(|group| summarize(key(&group[0]), group))
        .collect()
}

/// Subtotals for one calendar year of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub extra: Decimal,
    /// Balance after the last payment of the year.
    pub closing_balance: Decimal,
    pub closing_equity: Option<Decimal>,
}

impl YearSummary {
    fn from_months(year: i32, months: &[ScheduleEntry]) -> Self {
        let mut summary = Self {
            year,
            payment: Decimal::ZERO,
            principal: Decimal::ZERO,
            interest: Decimal::ZERO,
            extra: Decimal::ZERO,
            closing_balance: Decimal::ZERO,
            closing_equity: None,
        };
        for entry in months {
            summary.payment += entry.payment;
            summary.principal += entry.principal;
            summary.interest += entry.interest;
            summary.extra += entry.extra;
            summary.closing_balance = entry.balance;
            summary.closing_equity = entry.equity;
        }
        summary
    }
}

/// Per-calendar-year subtotals of `schedule`, in schedule order.
pub fn yearly_summaries(schedule: &ScheduleResult) -> Vec<YearSummary> {
    group_consecutive_by(
        &schedule.entries,
        |entry| entry.date.year(),
        YearSummary::from_months,
    )
}
