use crate::domain::money::Amount;
use crate::domain::month::parse_month;
use crate::domain::rule::{ExtraPaymentRule, Frequency};
use crate::error::{MortgageError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Read;
use std::str::FromStr;

/// An extra-payment rule as typed by the user, before coercion.
///
/// Every field is kept as text so a malformed value can be replaced by a
/// default instead of rejecting the whole row.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RuleRecord {
    pub amount: String,
    pub frequency: String,
    pub start: String,
}

/// Reads `amount,frequency,start` by position. Missing trailing columns are
/// left blank.
impl From<&csv::StringRecord> for RuleRecord {
    fn from(record: &csv::StringRecord) -> Self {
        let field = |i| record.get(i).unwrap_or_default().to_string();
        Self {
            amount: field(0),
            frequency: field(1),
            start: field(2),
        }
    }
}

impl RuleRecord {
    /// Converts the record into a rule.
    ///
    /// An unparseable or negative amount becomes zero, a blank frequency
    /// becomes monthly, and a blank or unparseable start becomes
    /// `origination`. Only an unknown frequency is an error.
    pub fn into_rule(self, origination: NaiveDate) -> Result<ExtraPaymentRule> {
        let amount = Decimal::from_str(self.amount.trim())
            .ok()
            .and_then(|value| Amount::new(value).ok())
            .unwrap_or_else(|| {
                tracing::debug!(amount = %self.amount, "coercing extra payment amount to 0");
                Amount::ZERO
            });

        let frequency = match self.frequency.trim().to_ascii_lowercase().as_str() {
            "" | "monthly" => Frequency::Monthly,
            "annually" | "annual" | "yearly" => Frequency::Annually,
            other => {
                return Err(MortgageError::InvalidInput(format!(
                    "unknown extra payment frequency '{other}'"
                )));
            }
        };

        let start = if self.start.trim().is_empty() {
            origination
        } else {
            parse_month(&self.start).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "defaulting extra payment start to origination");
                origination
            })
        };

        Ok(ExtraPaymentRule::new(amount, frequency, start))
    }
}

/// Parses the `AMOUNT[:FREQUENCY[:START]]` shorthand used on the command line.
impl FromStr for RuleRecord {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let mut next = || parts.next().unwrap_or_default().trim().to_string();
        Ok(Self {
            amount: next(),
            frequency: next(),
            start: next(),
        })
    }
}

/// Reads extra-payment rules from a CSV source with an
/// `amount,frequency,start` header.
pub struct RuleReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RuleReader<R> {
    /// Creates a new `RuleReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator over the raw records. Short rows are padded with
    /// blank fields rather than rejected.
    pub fn records(self) -> impl Iterator<Item = Result<RuleRecord>> {
        self.reader.into_records().map(|result| {
            result
                .map(|record| RuleRecord::from(&record))
                .map_err(MortgageError::from)
        })
    }

    /// Returns an iterator over coerced rules, defaulting start months to
    /// `origination`.
    pub fn rules(self, origination: NaiveDate) -> impl Iterator<Item = Result<ExtraPaymentRule>> {
        self.records()
            .map(move |record| record.and_then(|r| r.into_rule(origination)))
    }
}
