//! Savings capacity estimation from a user profile

use crate::assumptions::ExpenseModel;
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};

/// Monthly cash available for saving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsCapacity {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_savings_potential: f64,
    pub annual_savings_potential: f64,

    /// Share of income spent on basic needs, in `[0, 0.85]` by default
    pub expense_ratio: f64,
    pub savings_ratio: f64,

    pub emergency_fund_target: f64,

    /// Months of saving to fill the emergency fund; 0 when nothing can be saved
    pub months_to_emergency_fund: f64,
}

/// Estimate savings capacity
///
/// Never fails: negative income is treated as zero and the expense ratio is clamped.
pub fn estimate_savings_capacity(profile: &UserProfile, model: &ExpenseModel) -> SavingsCapacity {
    let monthly_income = profile.income() / 12.0;
    let expense_ratio = model.expense_ratio(profile);

    let monthly_expenses = monthly_income * expense_ratio;
    let monthly_savings_potential = (monthly_income - monthly_expenses).max(0.0);
    let emergency_fund_target = monthly_expenses * model.emergency_fund_months;

    let months_to_emergency_fund = if monthly_savings_potential > 0.0 {
        emergency_fund_target / monthly_savings_potential
    } else {
        0.0
    };

    log::debug!(
        "savings capacity: income {:.2}/month, expense ratio {:.3}, savings {:.2}/month",
        monthly_income,
        expense_ratio,
        monthly_savings_potential
    );

    SavingsCapacity {
        monthly_income,
        monthly_expenses,
        monthly_savings_potential,
        annual_savings_potential: monthly_savings_potential * 12.0,
        expense_ratio,
        savings_ratio: 1.0 - expense_ratio,
        emergency_fund_target,
        months_to_emergency_fund,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::RiskTolerance;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_married_parent_scenario() {
        let profile = UserProfile::new(32, 72_000.0, RiskTolerance::Medium)
            .married()
            .with_children(1);
        let capacity = estimate_savings_capacity(&profile, &ExpenseModel::default());

        assert_abs_diff_eq!(capacity.expense_ratio, 0.65, epsilon = 1e-12);
        assert_abs_diff_eq!(capacity.monthly_income, 6_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(capacity.monthly_expenses, 3_900.0, epsilon = 1e-9);
        assert_abs_diff_eq!(capacity.monthly_savings_potential, 2_100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(capacity.annual_savings_potential, 25_200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(capacity.emergency_fund_target, 23_400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(capacity.months_to_emergency_fund, 23_400.0 / 2_100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_income() {
        let profile = UserProfile::new(40, 0.0, RiskTolerance::Low);
        let capacity = estimate_savings_capacity(&profile, &ExpenseModel::default());

        assert_eq!(capacity.monthly_income, 0.0);
        assert_eq!(capacity.monthly_savings_potential, 0.0);
        assert_eq!(capacity.months_to_emergency_fund, 0.0);
    }

    #[test]
    fn test_negative_income_clamped() {
        let profile = UserProfile::new(40, -5_000.0, RiskTolerance::Low);
        let capacity = estimate_savings_capacity(&profile, &ExpenseModel::default());

        assert_eq!(capacity.monthly_income, 0.0);
        assert_eq!(capacity.monthly_expenses, 0.0);
    }

    proptest! {
        #[test]
        fn prop_ratio_bounded_and_savings_non_negative(
            income in 0.0f64..2_000_000.0,
            age in 18u32..90,
            children in 0u32..8,
            married in any::<bool>(),
        ) {
            let mut profile = UserProfile::new(age, income, RiskTolerance::Medium).with_children(children);
            if married {
                profile = profile.married();
            }
            let capacity = estimate_savings_capacity(&profile, &ExpenseModel::default());

            prop_assert!(capacity.expense_ratio >= 0.0 && capacity.expense_ratio <= 0.85);
            prop_assert!(capacity.monthly_savings_potential >= 0.0);
            prop_assert!(
                (capacity.monthly_savings_potential
                    - (capacity.monthly_income - capacity.monthly_expenses)).abs() < 1e-6
            );
        }
    }
}
