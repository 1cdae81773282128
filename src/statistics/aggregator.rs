//! Orchestration of the individual estimators into one report

use super::report::{KeyStatistics, Presentable};
use crate::assumptions::Assumptions;
use crate::goals::{extract_plan_metrics, GoalTimeline};
use crate::profile::UserProfile;
use crate::projection::{wealth_projection, DEFAULT_PROJECTION_YEARS, MAX_PROJECTION_YEARS};
use crate::risk::{analyze_risk_return, Product};
use crate::savings::estimate_savings_capacity;
use chrono::NaiveDate;
use rayon::prelude::*;

/// Where goal labels come from
#[derive(Debug, Clone, PartialEq)]
pub enum GoalSource<'a> {
    /// Mined from generated plan markdown
    PlanText(&'a str),
    /// Supplied directly, in priority order
    Listed(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatorConfig {
    /// Wealth projection horizon, capped at `MAX_PROJECTION_YEARS`
    pub years: u32,
    /// Maximum number of goal timelines per report
    pub max_goals: usize,
    /// Shorter goal labels are skipped
    pub min_goal_label_len: usize,
    pub as_of: NaiveDate,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            years: DEFAULT_PROJECTION_YEARS,
            max_goals: 3,
            min_goal_label_len: 6,
            as_of: chrono::Local::now().date_naive(),
        }
    }
}

/// Builds `KeyStatistics` for user profiles under a fixed set of assumptions
#[derive(Debug, Clone)]
pub struct StatisticsAggregator {
    assumptions: Assumptions,
    config: AggregatorConfig,
}

impl StatisticsAggregator {
    pub fn new(assumptions: Assumptions, config: AggregatorConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn with_config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Full report for one profile
    pub fn aggregate(&self, profile: &UserProfile, goals: GoalSource<'_>, products: &[Product]) -> KeyStatistics {
        let assumptions = &self.assumptions;

        let (plan_metrics, candidates) = match goals {
            GoalSource::PlanText(text) => {
                let metrics = extract_plan_metrics(text, profile);
                let candidates: Vec<String> = metrics.all_goals().cloned().collect();
                (Some(metrics), candidates)
            }
            GoalSource::Listed(labels) => (None, labels),
        };

        let goal_timelines: Vec<GoalTimeline> = self
            .select_goals(&candidates)
            .map(|goal| GoalTimeline::for_goal(profile, goal, assumptions, self.config.as_of).presented())
            .collect();

        let savings_capacity = estimate_savings_capacity(profile, &assumptions.expense);
        let projection = wealth_projection(profile, self.horizon(), assumptions);
        let risk_return = analyze_risk_return(profile.risk_tolerance, products, assumptions);

        log::info!(
            "aggregated profile (age {}, {}): {} products, {} of {} goals timed",
            profile.age,
            profile.risk_tolerance,
            products.len(),
            goal_timelines.len(),
            candidates.len()
        );

        KeyStatistics {
            plan_metrics: plan_metrics.map(Presentable::presented),
            savings_capacity: savings_capacity.presented(),
            wealth_projection: projection.presented(),
            risk_return_analysis: risk_return.presented(),
            goal_timelines,
            as_of: self.config.as_of,
        }
    }

    /// Reports for many profiles, each using its own listed goals
    pub fn aggregate_batch(&self, profiles: &[UserProfile], products: &[Product]) -> Vec<KeyStatistics> {
        profiles
            .par_iter()
            .map(|profile| self.aggregate(profile, GoalSource::Listed(profile.financial_goals.clone()), products))
            .collect()
    }

    fn horizon(&self) -> u32 {
        if self.config.years > MAX_PROJECTION_YEARS {
            log::warn!(
                "projection horizon {} years capped at {}",
                self.config.years,
                MAX_PROJECTION_YEARS
            );
        }
        self.config.years.min(MAX_PROJECTION_YEARS)
    }

    /// The first `max_goals` candidates, minus labels that are too short
    fn select_goals<'g>(&self, candidates: &'g [String]) -> impl Iterator<Item = &'g String> + 'g {
        let min_len = self.config.min_goal_label_len;
        candidates
            .iter()
            .take(self.config.max_goals)
            .filter(move |goal| goal.chars().count() >= min_len)
    }
}

impl Default for StatisticsAggregator {
    fn default() -> Self {
        Self::new(Assumptions::default_bank(), AggregatorConfig::default())
    }
}
