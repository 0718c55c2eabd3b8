use crate::application::engine::compute_schedule;
use crate::domain::loan::LoanTerms;
use crate::domain::rule::ExtraPaymentRule;
use crate::domain::schedule::ScheduleResult;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;

/// A schedule with extra payments next to the same loan without them.
///
/// Both schedules come from independent calls to [`compute_schedule`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub baseline: ScheduleResult,
    pub actual: ScheduleResult,
}

impl Comparison {
    pub fn compute(loan: &LoanTerms, rules: &[ExtraPaymentRule]) -> Result<Self> {
        let baseline = compute_schedule(loan, &[])?;
        let actual = compute_schedule(loan, rules)?;
        Ok(Self { baseline, actual })
    }

    /// Interest avoided thanks to the extra payments.
    pub fn interest_savings(&self) -> Decimal {
        self.baseline.total_interest - self.actual.total_interest
    }

    /// How many months earlier the loan is paid off.
    pub fn months_saved(&self) -> i64 {
        self.baseline.months() as i64 - self.actual.months() as i64
    }
}
