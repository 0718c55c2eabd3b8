use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    /// First day of the payment month.
    pub date: NaiveDate,
    /// Principal plus interest paid this month, excluding extra payments.
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub extra: Decimal,
    /// Remaining balance after this month's payment. Never negative.
    pub balance: Decimal,
    /// Appreciated home value, when equity is tracked.
    pub home_value: Option<Decimal>,
    /// Home value minus remaining balance, when equity is tracked.
    pub equity: Option<Decimal>,
}

/// A complete amortization schedule with its aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    pub entries: Vec<ScheduleEntry>,
    pub standard_payment: Decimal,
    pub total_interest: Decimal,
    pub total_extra: Decimal,
    pub payoff_date: NaiveDate,
    pub final_equity: Option<Decimal>,
}

impl ScheduleResult {
    /// Builds the aggregates from a non-empty list of entries.
    ///
    /// Returns `None` for an empty schedule.
    pub fn from_entries(entries: Vec<ScheduleEntry>, standard_payment: Decimal) -> Option<Self> {
        let last = entries.last()?;
        let payoff_date = last.date;
        let final_equity = last.equity;
        let total_interest = entries.iter().map(|e| e.interest).sum();
        let total_extra = entries.iter().map(|e| e.extra).sum();
        Some(Self {
            entries,
            standard_payment,
            total_interest,
            total_extra,
            payoff_date,
            final_equity,
        })
    }

    pub fn months(&self) -> usize {
        self.entries.len()
    }

    pub fn final_balance(&self) -> Decimal {
        self.entries
            .last()
            .map(|e| e.balance)
            .unwrap_or(Decimal::ZERO)
    }

    /// Principal retired by scheduled and extra payments combined.
    pub fn total_principal_paid(&self) -> Decimal {
        self.entries.iter().map(|e| e.principal + e.extra).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(month: u32, interest: Decimal, extra: Decimal, equity: Option<Decimal>) -> ScheduleEntry {
        ScheduleEntry {
            date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            payment: dec!(100),
            principal: dec!(100) - interest,
            interest,
            extra,
            balance: dec!(0),
            home_value: None,
            equity,
        }
    }

    #[test]
    fn test_from_entries_aggregates() {
        let result = ScheduleResult::from_entries(
            vec![
                entry(1, dec!(10), dec!(0), Some(dec!(5))),
                entry(2, dec!(7.5), dec!(20), Some(dec!(9))),
            ],
            dec!(100),
        )
        .unwrap();

        assert_eq!(result.total_interest, dec!(17.5));
        assert_eq!(result.total_extra, dec!(20));
        assert_eq!(result.payoff_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(result.final_equity, Some(dec!(9)));
        assert_eq!(result.total_principal_paid(), dec!(90) + dec!(92.5) + dec!(20));
        assert_eq!(result.months(), 2);
    }

    #[test]
    fn test_from_entries_empty() {
        assert!(ScheduleResult::from_entries(Vec::new(), dec!(1)).is_none());
    }
}
