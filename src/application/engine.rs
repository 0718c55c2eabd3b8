use crate::domain::loan::LoanTerms;
use crate::domain::money::PAYOFF_EPSILON;
use crate::domain::month::{first_of_month, next_month};
use crate::domain::rule::ExtraPaymentRule;
use crate::domain::schedule::{ScheduleEntry, ScheduleResult};
use crate::error::{MortgageError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Computes the month-by-month amortization schedule of `loan`.
///
/// Every month pays the standard amortized payment plus the sum of all
/// `rules` active that month. The schedule ends in the first month whose
/// remaining balance is at or below [`PAYOFF_EPSILON`].
///
/// When a month's principal plus extra would overshoot the balance, the
/// payment is clamped to the balance and the extra for that month is dropped
/// entirely.
///
/// # Errors
///
/// Returns [`MortgageError::InvalidInput`] when the loan terms are invalid
/// (see [`LoanTerms::validate`]) and [`MortgageError::Numeric`] when the
/// payment cannot be computed or does not retire any principal.
pub fn compute_schedule(loan: &LoanTerms, rules: &[ExtraPaymentRule]) -> Result<ScheduleResult> {
    loan.validate()?;

    let rate = loan.monthly_rate();
    let payment = loan.standard_payment()?;
    let appreciation = loan.home.map(|home| home.monthly_appreciation());
    let mut home_value = loan.home.map(|home| home.home_value);

    let mut balance = loan.principal;
    let mut month = first_of_month(loan.origination);
    let mut entries =
        Vec::with_capacity(loan.total_months().ceil().to_usize().unwrap_or_default());

    while balance > PAYOFF_EPSILON {
        let interest = balance * rate;
        let mut principal = payment - interest;
        let mut extra: Decimal = rules
            .iter()
            .filter(|rule| rule.is_active(month))
            .map(|rule| rule.amount.value())
            .sum();

        // Final payment never overshoots; extra is dropped, not reduced.
        if balance < principal + extra {
            principal = balance;
            extra = Decimal::ZERO;
        }

        if principal + extra <= Decimal::ZERO {
            return Err(MortgageError::Numeric(format!(
                "payment of {payment} does not cover interest of {interest} in {month}"
            )));
        }

        balance -= principal + extra;

        if let (Some(value), Some(appreciation)) = (home_value.as_mut(), appreciation) {
            *value = value
                .checked_mul(appreciation)
                .and_then(|gain| value.checked_add(gain))
                .ok_or_else(|| {
                    MortgageError::Numeric(format!("home value overflows in {month}"))
                })?;
        }
        let equity = home_value.map(|value| value - balance.max(Decimal::ZERO));

        entries.push(ScheduleEntry {
            date: month,
            payment: principal + interest,
            principal,
            interest,
            extra,
            balance: balance.max(Decimal::ZERO),
            home_value,
            equity,
        });

        month = next_month(month)?;
    }

    let result = ScheduleResult::from_entries(entries, payment).ok_or_else(|| {
        MortgageError::InvalidInput(format!(
            "principal {} is already below the payoff threshold",
            loan.principal
        ))
    })?;

    tracing::debug!(
        months = result.months(),
        payoff = %result.payoff_date,
        total_interest = %result.total_interest,
        rules = rules.len(),
        "computed amortization schedule"
    );

    Ok(result)
}
