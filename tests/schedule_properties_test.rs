use chrono::NaiveDate;
use mortgage_planner::application::comparison::Comparison;
use mortgage_planner::application::engine::compute_schedule;
use mortgage_planner::domain::loan::LoanTerms;
use mortgage_planner::domain::money::{Amount, PAYOFF_EPSILON};
use mortgage_planner::domain::rule::{ExtraPaymentRule, Frequency};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

fn loan_strategy() -> impl Strategy<Value = LoanTerms> {
    (
        10_000i64..1_000_000,
        0i64..1500,
        1u32..41,
        2000i32..2040,
        1u32..13,
    )
        .prop_map(|(principal, rate_bp, years, year, month)| {
            LoanTerms::new(
                Decimal::new(principal, 0),
                Decimal::new(rate_bp, 2),
                Decimal::from(years),
                NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            )
        })
}

fn rule_strategy() -> impl Strategy<Value = (i64, bool, u32)> {
    (1i64..5_000, any::<bool>(), 0u32..120)
}

fn to_rule(loan: &LoanTerms, (amount, annual, offset): (i64, bool, u32)) -> ExtraPaymentRule {
    let start = loan
        .origination
        .checked_add_months(chrono::Months::new(offset))
        .unwrap();
    let frequency = if annual {
        Frequency::Annually
    } else {
        Frequency::Monthly
    };
    ExtraPaymentRule::new(Amount::new(Decimal::new(amount, 0)).unwrap(), frequency, start)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_baseline_pays_off_within_term(loan in loan_strategy()) {
        let result = compute_schedule(&loan, &[]).unwrap();
        let term_months = loan.total_months().to_usize().unwrap();

        prop_assert!(result.months() <= term_months);
        prop_assert!(result.final_balance() <= PAYOFF_EPSILON);
        prop_assert!(result.final_balance() >= Decimal::ZERO);

        let principal: Decimal = result.entries.iter().map(|e| e.principal).sum();
        prop_assert!((principal - loan.principal).abs() <= PAYOFF_EPSILON);
    }

    #[test]
    fn test_extra_payments_never_hurt(loan in loan_strategy(), raw in rule_strategy()) {
        let rule = to_rule(&loan, raw);
        let comparison = Comparison::compute(&loan, &[rule]).unwrap();

        prop_assert!(comparison.actual.total_interest <= comparison.baseline.total_interest);
        prop_assert!(comparison.actual.payoff_date <= comparison.baseline.payoff_date);
        prop_assert!(comparison.actual.final_balance() <= PAYOFF_EPSILON);
        prop_assert!(
            (comparison.actual.total_principal_paid() - loan.principal).abs() <= PAYOFF_EPSILON
        );
    }

    #[test]
    fn test_balance_never_increases(loan in loan_strategy(), raw in rule_strategy()) {
        let rule = to_rule(&loan, raw);
        let result = compute_schedule(&loan, &[rule]).unwrap();

        let mut previous = loan.principal;
        for entry in &result.entries {
            prop_assert!(entry.balance <= previous);
            prop_assert!(entry.balance >= Decimal::ZERO);
            previous = entry.balance;
        }
    }
}
