use crate::error::MortgageError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Balance at or below which a loan counts as paid off.
///
/// Interest on a shrinking balance never lands exactly on zero, so both the
/// loop condition and the reported payoff use this bound.
pub const PAYOFF_EPSILON: Decimal = dec!(0.01);

/// A non-negative monetary amount, used for extra payments.
///
/// Wraps `rust_decimal::Decimal` so a negative extra payment cannot reach the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, MortgageError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(MortgageError::InvalidInput(format!(
                "amount must not be negative, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = MortgageError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Rounds a monetary value to cents for display, halves away from zero,
/// dropping trailing zeros.
pub fn to_cents(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
