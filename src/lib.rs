//! Plan Analytics - Deterministic statistics for personal financial plans
//!
//! This library provides:
//! - Savings capacity estimation from a user profile
//! - Product return and risk lookups by risk tier
//! - Year-by-year compound wealth projections
//! - Goal timelines with milestone dates
//! - Portfolio risk/return scoring
//! - One consolidated report for the plan view, with batch support

pub mod error;
pub mod profile;
pub mod assumptions;
pub mod savings;
pub mod projection;
pub mod goals;
pub mod risk;
pub mod statistics;

// Re-export commonly used types
pub use error::{AnalyticsError, Result};
pub use profile::{UserProfile, RiskTolerance, MaritalStatus};
pub use assumptions::{Assumptions, ProductCategory, ReturnTable};
pub use savings::{estimate_savings_capacity, SavingsCapacity};
pub use projection::{CompoundProjector, ProjectionConfig, WealthProjection};
pub use goals::{months_to_goal, GoalTimeline, Feasibility};
pub use risk::{analyze_risk_return, Product, RiskReturnReport};
pub use statistics::{AggregatorConfig, GoalSource, KeyStatistics, StatisticsAggregator};
