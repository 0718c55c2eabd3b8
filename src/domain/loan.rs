use crate::domain::month::first_of_month;
use crate::error::{MortgageError, Result};
use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::Serialize;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Initial home value and its yearly appreciation, used for equity tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HomeProjection {
    pub home_value: Decimal,
    /// Annual appreciation in percent. Zero and negative values are allowed.
    pub annual_appreciation_percent: Decimal,
}

impl HomeProjection {
    pub fn monthly_appreciation(&self) -> Decimal {
        self.annual_appreciation_percent / PERCENT / MONTHS_PER_YEAR
    }
}

/// Fixed-rate loan terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    /// Term in years; fractional terms are allowed.
    pub term_years: Decimal,
    /// Always the first day of the origination month.
    pub origination: NaiveDate,
    /// `None` disables equity tracking.
    pub home: Option<HomeProjection>,
}

impl LoanTerms {
    /// Creates loan terms, normalising the origination date to its month.
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_years: Decimal,
        origination: NaiveDate,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
            origination: first_of_month(origination),
            home: None,
        }
    }

    pub fn with_home(mut self, home_value: Decimal, annual_appreciation_percent: Decimal) -> Self {
        self.home = Some(HomeProjection {
            home_value,
            annual_appreciation_percent,
        });
        self
    }

    /// Checks the preconditions of the amortization engine.
    pub fn validate(&self) -> Result<()> {
        if self.principal <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput(format!(
                "principal must be positive, got {}",
                self.principal
            )));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(MortgageError::InvalidInput(format!(
                "interest rate must not be negative, got {}",
                self.annual_rate_percent
            )));
        }
        if self.term_years <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput(format!(
                "term must be positive, got {}",
                self.term_years
            )));
        }
        if let Some(home) = &self.home
            && home.home_value < Decimal::ZERO
        {
            return Err(MortgageError::InvalidInput(format!(
                "home value must not be negative, got {}",
                home.home_value
            )));
        }
        Ok(())
    }

    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / PERCENT / MONTHS_PER_YEAR
    }

    /// Nominal number of payments, `term_years * 12`. May be fractional.
    pub fn total_months(&self) -> Decimal {
        self.term_years * MONTHS_PER_YEAR
    }

    /// The standard amortized monthly payment.
    ///
    /// `P * r(1+r)^n / ((1+r)^n - 1)`, or `P / n` when the rate is zero.
    pub fn standard_payment(&self) -> Result<Decimal> {
        let rate = self.monthly_rate();
        let months = self.total_months();
        if rate.is_zero() {
            return Ok(self.principal / months);
        }

        let growth = (Decimal::ONE + rate).checked_powd(months).ok_or_else(|| {
            MortgageError::Numeric(format!("(1 + {rate})^{months} overflows"))
        })?;
        let numerator = self
            .principal
            .checked_mul(rate)
            .and_then(|v| v.checked_mul(growth))
            .ok_or_else(|| MortgageError::Numeric("payment numerator overflows".to_string()))?;
        numerator
            .checked_div(growth - Decimal::ONE)
            .ok_or_else(|| MortgageError::Numeric("payment denominator is zero".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_new_normalizes_origination() {
        let loan = LoanTerms::new(
            dec!(1000),
            dec!(5),
            dec!(1),
            NaiveDate::from_ymd_opt(2024, 5, 23).unwrap(),
        );
        assert_eq!(loan.origination, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_standard_payment_thirty_year() {
        let loan = LoanTerms::new(dec!(300000), dec!(6.5), dec!(30), jan_2024());
        let payment = loan.standard_payment().unwrap();
        assert!(
            (payment - dec!(1896.20)).abs() < dec!(0.01),
            "unexpected payment {payment}"
        );
    }

    #[test]
    fn test_standard_payment_zero_rate() {
        let loan = LoanTerms::new(dec!(12000), dec!(0), dec!(1), jan_2024());
        assert_eq!(loan.standard_payment().unwrap(), dec!(1000));
    }

    #[test]
    fn test_standard_payment_fractional_term() {
        // 2.5 years is an integral 30 months.
        let loan = LoanTerms::new(dec!(30000), dec!(0), dec!(2.5), jan_2024());
        assert_eq!(loan.total_months(), dec!(30));
        assert_eq!(loan.standard_payment().unwrap(), dec!(1000));
    }

    #[test]
    fn test_monthly_rates() {
        let loan = LoanTerms::new(dec!(1000), dec!(12), dec!(1), jan_2024()).with_home(dec!(100), dec!(6));
        assert_eq!(loan.monthly_rate(), dec!(0.01));
        assert_eq!(loan.home.unwrap().monthly_appreciation(), dec!(0.005));
    }

    #[test]
    fn test_validate_rejects_bad_terms() {
        let ok = LoanTerms::new(dec!(1000), dec!(5), dec!(1), jan_2024());
        assert!(ok.validate().is_ok());

        let cases = [
            LoanTerms { principal: dec!(0), ..ok },
            LoanTerms { principal: dec!(-5), ..ok },
            LoanTerms { annual_rate_percent: dec!(-0.1), ..ok },
            LoanTerms { term_years: dec!(0), ..ok },
            ok.with_home(dec!(-1), dec!(3)),
        ];
        for loan in cases {
            assert!(matches!(
                loan.validate(),
                Err(MortgageError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_validate_allows_negative_appreciation() {
        let loan = LoanTerms::new(dec!(1000), dec!(5), dec!(1), jan_2024()).with_home(dec!(500), dec!(-2));
        assert!(loan.validate().is_ok());
    }
}
