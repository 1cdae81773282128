//! Year-by-year compound growth projection

use super::results::{WealthProjection, YearProjection};
use crate::assumptions::Assumptions;
use crate::profile::UserProfile;
use crate::savings::estimate_savings_capacity;

/// Default projection horizon in years
pub const DEFAULT_PROJECTION_YEARS: u32 = 10;

/// Longest horizon the reports support
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Balance at the start of year 1
    pub initial_amount: f64,

    /// Contribution paid in every month
    pub monthly_contribution: f64,

    /// Annual return as a decimal (0.05 = 5%)
    pub annual_return_rate: f64,

    /// Number of years to project
    pub years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            initial_amount: 0.0,
            monthly_contribution: 0.0,
            annual_return_rate: 0.06,
            years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

/// Compound growth projector
pub struct CompoundProjector {
    config: ProjectionConfig,
}

impl CompoundProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection
    ///
    /// Each year's contributions join the principal before that year's
    /// return is applied.
    pub fn project(&self) -> Vec<YearProjection> {
        let cfg = &self.config;
        let mut rows = Vec::with_capacity(cfg.years as usize);
        let mut balance = cfg.initial_amount;
        let mut total_contributions = cfg.initial_amount;

        for year in 1..=cfg.years {
            let yearly_contributions = cfg.monthly_contribution * 12.0;
            total_contributions += yearly_contributions;
            balance += yearly_contributions;

            let yearly_return = balance * cfg.annual_return_rate;
            balance += yearly_return;

            rows.push(YearProjection {
                year,
                balance,
                total_contributions,
                total_returns: balance - total_contributions,
                yearly_return,
            });
        }

        rows
    }

    /// Run the projection and summarize it
    pub fn project_with_summary(&self) -> WealthProjection {
        WealthProjection::new(
            self.project(),
            self.config.monthly_contribution,
            self.config.annual_return_rate,
        )
    }
}

/// Year-by-year growth of an initial amount plus monthly contributions
pub fn project_investment(
    initial_amount: f64,
    monthly_contribution: f64,
    annual_return_rate: f64,
    years: u32,
) -> Vec<YearProjection> {
    CompoundProjector::new(ProjectionConfig {
        initial_amount,
        monthly_contribution,
        annual_return_rate,
        years,
    })
    .project()
}

/// Project a profile's wealth from zero, saving its full monthly potential
/// at the tier's projection rate
pub fn wealth_projection(profile: &UserProfile, years: u32, assumptions: &Assumptions) -> WealthProjection {
    let capacity = estimate_savings_capacity(profile, &assumptions.expense);
    let annual_return_rate = assumptions.projection_rate(profile.risk_tolerance);

    log::debug!(
        "wealth projection: {} years at {:.1}% for {} risk",
        years,
        annual_return_rate * 100.0,
        profile.risk_tolerance
    );

    CompoundProjector::new(ProjectionConfig {
        initial_amount: 0.0,
        monthly_contribution: capacity.monthly_savings_potential,
        annual_return_rate,
        years,
    })
    .project_with_summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::RiskTolerance;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_contributions_before_return() {
        let rows = project_investment(0.0, 100.0, 0.10, 1);
        assert_eq!(rows.len(), 1);

        // 1200 contributed, then 10% credited on the whole amount
        assert_abs_diff_eq!(rows[0].yearly_return, 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[0].balance, 1_320.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[0].total_returns, 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_initial_amount_counts_as_contribution() {
        let rows = project_investment(5_000.0, 1_200.0, 0.07, 10);
        assert_eq!(rows.len(), 10);

        let year1 = rows[0];
        assert_abs_diff_eq!(year1.total_contributions, 5_000.0 + 14_400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(year1.balance, 19_400.0 * 1.07, epsilon = 1e-9);

        let last = rows.last().unwrap();
        assert_abs_diff_eq!(last.total_contributions, 5_000.0 + 144_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.total_returns, last.balance - last.total_contributions, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate() {
        let rows = project_investment(0.0, 500.0, 0.0, 3);
        for row in &rows {
            assert_eq!(row.yearly_return, 0.0);
            assert_eq!(row.balance, row.total_contributions);
        }
        assert_abs_diff_eq!(rows[2].balance, 18_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_years() {
        assert!(project_investment(1_000.0, 100.0, 0.05, 0).is_empty());
    }

    #[test]
    fn test_wealth_projection_uses_tier_rate() {
        let profile = UserProfile::new(32, 72_000.0, RiskTolerance::High)
            .married()
            .with_children(1);
        let projection = wealth_projection(&profile, 10, &Assumptions::default_bank());

        assert_eq!(projection.projections.len(), 10);
        assert_eq!(projection.summary.years, 10);
        assert_eq!(projection.summary.annual_return_rate, 0.08);
        assert_abs_diff_eq!(projection.summary.monthly_contribution, 2_100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.summary.total_contributions, 252_000.0, epsilon = 1e-6);
        assert!(projection.summary.roi_percentage > 0.0);
    }

    #[test]
    fn test_idempotent() {
        let a = project_investment(1_000.0, 250.0, 0.045, 15);
        let b = project_investment(1_000.0, 250.0, 0.045, 15);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_balance_non_decreasing(
            initial in 0.0f64..500_000.0,
            contribution in 0.0f64..20_000.0,
            rate in 0.0f64..0.25,
            years in 1u32..40,
        ) {
            let rows = project_investment(initial, contribution, rate, years);
            prop_assert_eq!(rows.len(), years as usize);

            let mut previous = initial;
            for row in &rows {
                prop_assert!(row.balance >= previous);
                prop_assert!((row.total_returns - (row.balance - row.total_contributions)).abs() < 1e-6);
                previous = row.balance;
            }
        }
    }
}
