use crate::domain::money::Amount;
use crate::domain::month::first_of_month;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Annually,
}

/// A recurring additional principal payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct ExtraPaymentRule {
    pub amount: Amount,
    pub frequency: Frequency,
    /// First month the rule may apply. Only the year and month matter.
    pub start: NaiveDate,
}

impl ExtraPaymentRule {
    pub fn new(amount: Amount, frequency: Frequency, start: NaiveDate) -> Self {
        Self {
            amount,
            frequency,
            start: first_of_month(start),
        }
    }

    /// Whether the rule contributes to the payment of `month`.
    ///
    /// A rule is active on or after its start month. Annual rules are further
    /// restricted to the start month's month-of-year.
    pub fn is_active(&self, month: NaiveDate) -> bool {
        let month = first_of_month(month);
        let start = first_of_month(self.start);
        if month < start {
            return false;
        }
        match self.frequency {
            Frequency::Monthly => true,
            Frequency::Annually => month.month() == start.month(),
        }
    }
}
