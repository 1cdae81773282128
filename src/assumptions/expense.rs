//! Household expense-ratio model

use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};

/// Parameters for estimating what share of income goes to basic needs
/// (housing, utilities, food, transport)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseModel {
    /// Share of income spent on basic needs before adjustments
    pub base_ratio: f64,

    /// Adjustment for married couples (economies of scale)
    pub married_adjustment: f64,

    /// Added per dependent child
    pub per_child_adjustment: f64,

    /// Added above `senior_age` (healthcare costs)
    pub senior_adjustment: f64,

    /// Adjustment applies strictly above this age
    pub senior_age: u32,

    /// Upper bound on the expense ratio
    pub max_ratio: f64,

    /// Months of expenses held as an emergency fund
    pub emergency_fund_months: f64,
}

impl Default for ExpenseModel {
    fn default() -> Self {
        Self {
            base_ratio: 0.60,
            married_adjustment: -0.05,
            per_child_adjustment: 0.10,
            senior_adjustment: 0.05,
            senior_age: 50,
            max_ratio: 0.85,
            emergency_fund_months: 6.0,
        }
    }
}

impl ExpenseModel {
    /// Expense ratio for a profile, clamped to `[0, max_ratio]`
    pub fn expense_ratio(&self, profile: &UserProfile) -> f64 {
        let mut ratio = self.base_ratio;

        if profile.marital_status.is_married() {
            ratio += self.married_adjustment;
        }

        ratio += self.per_child_adjustment * f64::from(profile.dependent_children());

        if profile.age > self.senior_age {
            ratio += self.senior_adjustment;
        }

        ratio.clamp(0.0, self.max_ratio.max(0.0))
    }
}
