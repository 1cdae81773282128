//! Risk/return assessment of the selected products

mod analysis;
mod product;

pub use analysis::{analyze_risk_return, estimate_product_returns, ProductEstimate, RiskLevel, RiskReturnReport};
pub use product::Product;
