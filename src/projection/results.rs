//! Output structures for wealth projections

use serde::{Deserialize, Serialize};

/// Balance snapshot at the end of one simulated year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// 1-indexed
    pub year: u32,
    pub balance: f64,
    /// Initial amount plus all contributions so far
    pub total_contributions: f64,
    /// balance - total_contributions
    pub total_returns: f64,
    /// Return credited in this year only
    pub yearly_return: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthProjection {
    pub projections: Vec<YearProjection>,
    pub summary: ProjectionSummary,
}

impl WealthProjection {
    pub fn new(projections: Vec<YearProjection>, monthly_contribution: f64, annual_return_rate: f64) -> Self {
        let summary = ProjectionSummary::from_rows(&projections, monthly_contribution, annual_return_rate);
        Self { projections, summary }
    }

    pub fn final_balance(&self) -> f64 {
        self.summary.final_balance
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub monthly_contribution: f64,
    pub annual_return_rate: f64,
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_returns: f64,
    /// Returns over contributions, in percent; 0 without contributions
    pub roi_percentage: f64,
}

impl ProjectionSummary {
    pub fn from_rows(rows: &[YearProjection], monthly_contribution: f64, annual_return_rate: f64) -> Self {
        let final_balance = rows.last().map(|r| r.balance).unwrap_or(0.0);
        let total_contributions = rows.last().map(|r| r.total_contributions).unwrap_or(0.0);
        let total_returns = final_balance - total_contributions;

        let roi_percentage = if total_contributions > 0.0 {
            total_returns / total_contributions * 100.0
        } else {
            0.0
        };

        Self {
            years: rows.len() as u32,
            monthly_contribution,
            annual_return_rate,
            final_balance,
            total_contributions,
            total_returns,
            roi_percentage,
        }
    }
}
