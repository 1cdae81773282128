//! Compound-interest wealth projections

mod engine;
mod results;

pub use engine::{
    project_investment, wealth_projection, CompoundProjector, ProjectionConfig, DEFAULT_PROJECTION_YEARS,
    MAX_PROJECTION_YEARS,
};
pub use results::{ProjectionSummary, WealthProjection, YearProjection};
