//! Goal solving: months-to-target, milestones and plan-text goal discovery

pub mod extract;
mod solver;
mod timeline;

pub use extract::{extract_plan_metrics, Horizon, PlanMetrics};
pub use solver::months_to_goal;
pub use timeline::{month_label, Feasibility, GoalTimeline, Milestone, MILESTONE_PERCENTAGES};
