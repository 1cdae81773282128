//! Consolidated plan statistics
//!
//! `StatisticsAggregator` runs savings estimation, wealth projection, goal
//! timelines and risk/return analysis for a profile and returns them as one
//! `KeyStatistics` report, rounded for display.

mod aggregator;
mod report;

pub use aggregator::{AggregatorConfig, GoalSource, StatisticsAggregator};
pub use report::{round_to, KeyStatistics};
