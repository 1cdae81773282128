//! Portfolio-level risk/return scoring

use super::product::Product;
use crate::assumptions::{Assumptions, ProductCategory};
use crate::profile::RiskTolerance;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Assumed return for one selected product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductEstimate {
    pub annual_return_rate: f64,
    pub category: ProductCategory,
    /// Rate was picked for the user's risk tier
    pub risk_adjusted: bool,
}

/// Discrete portfolio risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    MediumHigh,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 1.5 {
            RiskLevel::VeryLow
        } else if score < 2.5 {
            RiskLevel::Low
        } else if score < 3.5 {
            RiskLevel::Medium
        } else {
            RiskLevel::MediumHigh
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReturnReport {
    /// Unweighted mean of product returns, as a decimal
    pub average_return: f64,
    pub risk_level: RiskLevel,
    /// Mean category score, 1.0-4.0 (0 with no products)
    pub risk_score: f64,
    pub sharpe_ratio: f64,
    /// Distinct categories held, as a percentage of known categories
    pub diversification_score: f64,
    pub products_analysis: BTreeMap<String, ProductEstimate>,
}

/// Assumed return and category for each product
pub fn estimate_product_returns(
    tier: RiskTolerance,
    products: &[Product],
    assumptions: &Assumptions,
) -> BTreeMap<String, ProductEstimate> {
    products
        .iter()
        .map(|product| {
            let category = product.category();
            let estimate = ProductEstimate {
                annual_return_rate: assumptions.returns.rate(category, tier),
                category,
                risk_adjusted: true,
            };
            (product.name.clone(), estimate)
        })
        .collect()
}

/// Score the risk/return profile of a set of products
pub fn analyze_risk_return(tier: RiskTolerance, products: &[Product], assumptions: &Assumptions) -> RiskReturnReport {
    let table = &assumptions.returns;
    let count = products.len() as f64;

    let mut total_return = 0.0;
    let mut total_risk = 0.0;
    let mut categories = BTreeSet::new();

    for product in products {
        let category = product.category();
        total_return += table.rate(category, tier);
        total_risk += table.risk_score(category);
        categories.insert(category);
    }

    let (average_return, risk_score) = if products.is_empty() {
        (0.0, 0.0)
    } else {
        (total_return / count, total_risk / count)
    };

    let sharpe_ratio = if risk_score > 0.0 {
        (average_return - assumptions.risk_free_rate) / (risk_score / 4.0)
    } else {
        0.0
    };

    let known = table.known_categories().max(1) as f64;
    let diversification_score = (categories.len() as f64 / known * 100.0).min(100.0);

    log::debug!(
        "risk/return: {} products, avg return {:.4}, risk score {:.2}",
        products.len(),
        average_return,
        risk_score
    );

    RiskReturnReport {
        average_return,
        risk_level: RiskLevel::from_score(risk_score),
        risk_score,
        sharpe_ratio,
        diversification_score,
        products_analysis: estimate_product_returns(tier, products, assumptions),
    }
}
