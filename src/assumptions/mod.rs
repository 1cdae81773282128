//! Planning assumptions: product returns, risk scores, expense model and goal targets

mod expense;
mod goals;
mod returns;
pub mod loader;

pub use expense::ExpenseModel;
pub use goals::{GoalAmount, GoalCatalog, GoalTarget};
pub use loader::{LoadedAssumptions, DEFAULT_ASSUMPTIONS_PATH};
pub use returns::{CategoryAssumption, ProductCategory, ReturnTable, TierRates};

use crate::error::{AnalyticsError, Result};
use crate::profile::RiskTolerance;
use std::path::Path;

/// Container for all planning assumptions
///
/// Immutable once built; share one instance across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub returns: ReturnTable,

    /// Annual return used for the wealth projection, by risk tier
    pub projection_rates: TierRates,

    pub expense: ExpenseModel,

    pub goals: GoalCatalog,

    /// Annual return assumed when solving goal timelines
    pub goal_return_rate: f64,

    /// Risk-free rate for the Sharpe-like ratio
    pub risk_free_rate: f64,
}

impl Assumptions {
    /// Built-in assumptions for the retail bank product range
    pub fn default_bank() -> Self {
        Self {
            returns: ReturnTable::default_bank(),
            projection_rates: TierRates::new(0.04, 0.06, 0.08),
            expense: ExpenseModel::default(),
            goals: GoalCatalog::default_bank(),
            goal_return_rate: 0.05,
            risk_free_rate: 0.02,
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    ///
    /// Parameters missing from parameters.csv keep their built-in values.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(loaded)
    }

    pub fn from_loaded(loaded: LoadedAssumptions) -> Result<Self> {
        let defaults = Self::default_bank();

        let returns = ReturnTable::from_entries(loaded.product_returns.iter().copied())
            .ok_or(AnalyticsError::MissingCategory(ProductCategory::MOST_CONSERVATIVE.as_str()))?;

        let base = defaults.expense;
        let expense = ExpenseModel {
            base_ratio: loaded.parameter("base_expense_ratio", base.base_ratio),
            married_adjustment: loaded.parameter("married_adjustment", base.married_adjustment),
            per_child_adjustment: loaded.parameter("per_child_adjustment", base.per_child_adjustment),
            senior_adjustment: loaded.parameter("senior_adjustment", base.senior_adjustment),
            senior_age: loaded.parameter("senior_age", f64::from(base.senior_age)) as u32,
            max_ratio: loaded.parameter("max_expense_ratio", base.max_ratio),
            emergency_fund_months: loaded.parameter("emergency_fund_months", base.emergency_fund_months),
        };

        let goals = GoalCatalog::new(
            loaded.goal_targets.clone(),
            loaded.parameter("default_goal_amount", defaults.goals.default_amount),
        );

        Ok(Self {
            returns,
            projection_rates: loaded.projection_rates,
            expense,
            goals,
            goal_return_rate: loaded.parameter("goal_return_rate", defaults.goal_return_rate),
            risk_free_rate: loaded.parameter("risk_free_rate", defaults.risk_free_rate),
        })
    }

    /// Annual return for the wealth projection at a risk tier
    pub fn projection_rate(&self, tier: RiskTolerance) -> f64 {
        self.projection_rates.for_tier(tier)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_bank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_matches_builtin() {
        let from_csv = Assumptions::from_csv().expect("default assumption files");
        assert_eq!(from_csv, Assumptions::default_bank());
    }

    #[test]
    fn test_missing_conservative_category_rejected() {
        let mut loaded = LoadedAssumptions::load_default().unwrap();
        loaded
            .product_returns
            .retain(|(c, _)| *c != ProductCategory::MOST_CONSERVATIVE);

        let err = Assumptions::from_loaded(loaded).unwrap_err();
        assert!(matches!(err, AnalyticsError::MissingCategory("savings_account")));
    }

    #[test]
    fn test_projection_rates() {
        let assumptions = Assumptions::default_bank();
        assert_eq!(assumptions.projection_rate(RiskTolerance::Low), 0.04);
        assert_eq!(assumptions.projection_rate(RiskTolerance::Medium), 0.06);
        assert_eq!(assumptions.projection_rate(RiskTolerance::High), 0.08);
    }
}
