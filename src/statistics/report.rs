//! Consolidated report and its presentation rounding

use crate::goals::{GoalTimeline, PlanMetrics};
use crate::projection::{ProjectionSummary, WealthProjection, YearProjection};
use crate::risk::RiskReturnReport;
use crate::savings::SavingsCapacity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the plan view shows, rounded for display
///
/// Money is rounded to cents. Ratios and rates that are fractions internally
/// (`expense_ratio`, `savings_ratio`, `annual_return_rate`, `average_return`)
/// are reported in percent. Per-product rates in `products_analysis` stay
/// as fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyStatistics {
    /// Present only when goals were mined from plan text
    pub plan_metrics: Option<PlanMetrics>,
    pub savings_capacity: SavingsCapacity,
    pub wealth_projection: WealthProjection,
    pub risk_return_analysis: RiskReturnReport,
    pub goal_timelines: Vec<GoalTimeline>,
    /// Date milestone labels are counted from
    pub as_of: NaiveDate,
}

impl KeyStatistics {
    pub fn summary(&self) -> String {
        let savings = &self.savings_capacity;
        let projection = &self.wealth_projection.summary;
        let risk = &self.risk_return_analysis;

        format!(
            "Savings {:.2}/month ({:.1}% of income), {} years at {:.1}% -> {:.2} (ROI {:.1}%), \
             risk {:?} ({:.2}), {} goal timelines",
            savings.monthly_savings_potential,
            savings.savings_ratio,
            projection.years,
            projection.annual_return_rate,
            self.wealth_projection.final_balance(),
            projection.roi_percentage,
            risk.risk_level,
            risk.risk_score,
            self.goal_timelines.len()
        )
    }
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn money(value: f64) -> f64 {
    round_to(value, 2)
}

fn percent(fraction: f64, places: i32) -> f64 {
    round_to(fraction * 100.0, places)
}

/// Conversion of a raw result into its display form
pub(crate) trait Presentable {
    fn presented(self) -> Self;
}

impl Presentable for SavingsCapacity {
    fn presented(self) -> Self {
        Self {
            monthly_income: money(self.monthly_income),
            monthly_expenses: money(self.monthly_expenses),
            monthly_savings_potential: money(self.monthly_savings_potential),
            annual_savings_potential: money(self.annual_savings_potential),
            expense_ratio: percent(self.expense_ratio, 1),
            savings_ratio: percent(self.savings_ratio, 1),
            emergency_fund_target: money(self.emergency_fund_target),
            months_to_emergency_fund: round_to(self.months_to_emergency_fund, 1),
        }
    }
}

impl Presentable for YearProjection {
    fn presented(self) -> Self {
        Self {
            year: self.year,
            balance: money(self.balance),
            total_contributions: money(self.total_contributions),
            total_returns: money(self.total_returns),
            yearly_return: money(self.yearly_return),
        }
    }
}

impl Presentable for ProjectionSummary {
    fn presented(self) -> Self {
        Self {
            years: self.years,
            monthly_contribution: money(self.monthly_contribution),
            annual_return_rate: percent(self.annual_return_rate, 1),
            final_balance: money(self.final_balance),
            total_contributions: money(self.total_contributions),
            total_returns: money(self.total_returns),
            roi_percentage: round_to(self.roi_percentage, 1),
        }
    }
}

impl Presentable for WealthProjection {
    fn presented(self) -> Self {
        Self {
            projections: self.projections.into_iter().map(Presentable::presented).collect(),
            summary: self.summary.presented(),
        }
    }
}

impl Presentable for GoalTimeline {
    fn presented(mut self) -> Self {
        self.target_amount = money(self.target_amount);
        self.monthly_contribution = money(self.monthly_contribution);
        self.months_needed = self.months_needed.map(|m| round_to(m, 1));
        self.years_needed = self.years_needed.map(|y| round_to(y, 1));
        for milestone in &mut self.milestones {
            milestone.amount = money(milestone.amount);
        }
        self
    }
}

impl Presentable for PlanMetrics {
    fn presented(mut self) -> Self {
        self.monthly_income = money(self.monthly_income);
        self.annual_income = money(self.annual_income);
        self
    }
}

impl Presentable for RiskReturnReport {
    fn presented(mut self) -> Self {
        self.average_return = percent(self.average_return, 2);
        self.risk_score = round_to(self.risk_score, 2);
        self.sharpe_ratio = round_to(self.sharpe_ratio, 3);
        self.diversification_score = round_to(self.diversification_score, 1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ExpenseModel;
    use crate::profile::{RiskTolerance, UserProfile};
    use crate::savings::estimate_savings_capacity;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1234.5678, 2), 1234.57);
        assert_eq!(round_to(0.25, 1), 0.3);
        assert_eq!(round_to(-2.25, 1), -2.3);
        assert_eq!(round_to(81.29, 0), 81.0);
    }

    #[test]
    fn test_savings_presented_in_percent() {
        let profile = UserProfile::new(32, 72_000.0, RiskTolerance::Medium)
            .married()
            .with_children(1);
        let shown = estimate_savings_capacity(&profile, &ExpenseModel::default()).presented();

        assert_eq!(shown.expense_ratio, 65.0);
        assert_eq!(shown.savings_ratio, 35.0);
        assert_eq!(shown.monthly_savings_potential, 2_100.0);
        assert_eq!(shown.months_to_emergency_fund, 11.1);
    }

    #[test]
    fn test_summary_line() {
        use crate::statistics::{GoalSource, StatisticsAggregator};

        let profile = UserProfile::new(32, 72_000.0, RiskTolerance::Medium);
        let stats = StatisticsAggregator::default().aggregate(&profile, GoalSource::Listed(vec![]), &[]);
        let line = stats.summary();

        assert_eq!(stats.wealth_projection.final_balance(), stats.wealth_projection.summary.final_balance);
        assert!(line.contains(&format!("-> {:.2}", stats.wealth_projection.final_balance())));
        assert!(line.contains("10 years at 6.0%"));
        assert!(line.ends_with("0 goal timelines"));
    }

    #[test]
    fn test_timeline_keeps_unreachable() {
        let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let timeline = GoalTimeline::solve("Casă nouă", 100_000.0, 0.0, 0.05, as_of).presented();

        assert_eq!(timeline.months_needed, None);
        assert!(timeline.milestones.is_empty());
    }
}
