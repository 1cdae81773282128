//! Goal timelines with milestone checkpoints

use super::solver::months_to_goal;
use crate::assumptions::Assumptions;
use crate::profile::UserProfile;
use crate::savings::estimate_savings_capacity;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Progress checkpoints, in percent of the target
pub const MILESTONE_PERCENTAGES: [u32; 4] = [25, 50, 75, 100];

/// Format a date `months` after `as_of` as "October 2026"
pub fn month_label(as_of: NaiveDate, months: u32) -> Option<String> {
    as_of
        .checked_add_months(Months::new(months))
        .map(|date| date.format("%B %Y").to_string())
}

/// Simple threshold classification of how far away a goal is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feasibility {
    /// Under 10 years
    Realistic,
    /// 10 to 20 years
    LongTerm,
    /// 20 years or more
    Ambitious,
    /// Nothing can be saved towards it
    Unreachable,
}

impl Feasibility {
    pub fn classify(years_needed: Option<f64>) -> Self {
        match years_needed {
            None => Feasibility::Unreachable,
            Some(years) if years < 10.0 => Feasibility::Realistic,
            Some(years) if years < 20.0 => Feasibility::LongTerm,
            Some(_) => Feasibility::Ambitious,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub percentage: u32,
    pub amount: f64,
    /// Calendar month the checkpoint falls in
    pub date: String,
    pub months_from_now: u32,
}

/// Time needed to reach a goal by saving a fixed amount every month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalTimeline {
    pub goal: String,
    pub target_amount: f64,
    pub monthly_contribution: f64,

    /// None when the goal cannot be reached by saving
    pub months_needed: Option<f64>,
    pub years_needed: Option<f64>,

    /// None when no completion date can be computed
    pub estimated_completion: Option<String>,

    pub milestones: Vec<Milestone>,
    pub feasibility: Feasibility,
}

impl GoalTimeline {
    /// Solve a timeline for explicit amounts
    ///
    /// Negative targets are treated as zero. Dates are counted from `as_of`.
    pub fn solve(
        goal: impl Into<String>,
        target_amount: f64,
        monthly_contribution: f64,
        annual_return_rate: f64,
        as_of: NaiveDate,
    ) -> Self {
        let target_amount = target_amount.max(0.0);
        let months_needed = months_to_goal(target_amount, monthly_contribution, annual_return_rate);
        let years_needed = months_needed.map(|m| m / 12.0);

        let (estimated_completion, milestones) = match months_needed {
            Some(months) if months > 0.0 => (
                month_label(as_of, months as u32),
                build_milestones(target_amount, months, as_of),
            ),
            _ => (None, Vec::new()),
        };

        Self {
            goal: goal.into(),
            target_amount,
            monthly_contribution,
            months_needed,
            years_needed,
            estimated_completion,
            milestones,
            feasibility: Feasibility::classify(years_needed),
        }
    }

    /// Timeline for a free-text goal label, saving the profile's full monthly potential
    pub fn for_goal(profile: &UserProfile, goal: &str, assumptions: &Assumptions, as_of: NaiveDate) -> Self {
        let capacity = estimate_savings_capacity(profile, &assumptions.expense);
        let target = assumptions.goals.target_for(goal, capacity.emergency_fund_target);

        Self::solve(
            goal,
            target,
            capacity.monthly_savings_potential,
            assumptions.goal_return_rate,
            as_of,
        )
    }
}

fn build_milestones(target_amount: f64, months_needed: f64, as_of: NaiveDate) -> Vec<Milestone> {
    MILESTONE_PERCENTAGES
        .iter()
        .map(|&percentage| {
            let share = f64::from(percentage) / 100.0;
            let months_from_now = (months_needed * share).floor() as u32;
            Milestone {
                percentage,
                amount: target_amount * share,
                date: month_label(as_of, months_from_now).unwrap_or_else(|| "N/A".to_string()),
                months_from_now,
            }
        })
        .collect()
}
