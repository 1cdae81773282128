//! Product categories, assumed annual returns and category risk scores

use crate::profile::RiskTolerance;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Banking product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Instant-access savings account (cash-like)
    SavingsAccount,
    /// Fixed-term deposit
    Deposit,
    /// Mutual / investment fund (equity-like)
    InvestmentFund,
    /// Voluntary private pension fund
    PrivatePension,
    /// Bonds and other fixed-income securities
    FixedIncome,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::SavingsAccount,
        ProductCategory::Deposit,
        ProductCategory::InvestmentFund,
        ProductCategory::PrivatePension,
        ProductCategory::FixedIncome,
    ];

    /// Lowest-volatility category, used whenever a lookup misses
    pub const MOST_CONSERVATIVE: ProductCategory = ProductCategory::SavingsAccount;

    /// Name keywords per category, checked in `ALL` order.
    ///
    /// Order matters: "Fond de Pensii" classifies as an investment fund
    /// because "fond" is checked before "pensie".
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            ProductCategory::SavingsAccount => &["economii", "savings"],
            ProductCategory::Deposit => &["depozit", "deposit"],
            ProductCategory::InvestmentFund => &["fond", "invest"],
            ProductCategory::PrivatePension => &["pensie", "pension"],
            ProductCategory::FixedIncome => &["titlu", "bond"],
        }
    }

    /// Classify a product by substring match on its name
    ///
    /// Only a fallback for products without an explicit category.
    pub fn from_product_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
            .unwrap_or(Self::MOST_CONSERVATIVE)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::SavingsAccount => "savings_account",
            ProductCategory::Deposit => "deposit",
            ProductCategory::InvestmentFund => "investment_fund",
            ProductCategory::PrivatePension => "private_pension",
            ProductCategory::FixedIncome => "fixed_income",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "savings_account" | "cont_economii" => Ok(ProductCategory::SavingsAccount),
            "deposit" | "depozit" => Ok(ProductCategory::Deposit),
            "investment_fund" | "fond_investitii" => Ok(ProductCategory::InvestmentFund),
            "private_pension" | "pensie_privata" => Ok(ProductCategory::PrivatePension),
            "fixed_income" | "titluri_venit_fix" => Ok(ProductCategory::FixedIncome),
            _ => Err(format!("unknown product category: {}", s)),
        }
    }
}

/// One value per risk tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierRates {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl TierRates {
    pub const fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    pub fn for_tier(&self, tier: RiskTolerance) -> f64 {
        match tier {
            RiskTolerance::Low => self.low,
            RiskTolerance::Medium => self.medium,
            RiskTolerance::High => self.high,
        }
    }

    /// Riskier tiers never pay less than safer ones
    pub fn is_monotonic(&self) -> bool {
        self.low <= self.medium && self.medium <= self.high
    }
}

/// Return and risk assumptions for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAssumption {
    pub rates: TierRates,
    /// 1 = cash-like .. 4 = equity-like
    pub risk_score: u8,
}

/// Assumed annual returns per category and tier
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTable {
    categories: HashMap<ProductCategory, CategoryAssumption>,
}

impl ReturnTable {
    /// Build a table from explicit entries
    ///
    /// Returns None when the most conservative category is missing, since
    /// every failed lookup resolves to it.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ProductCategory, CategoryAssumption)>,
    ) -> Option<Self> {
        let categories: HashMap<_, _> = entries.into_iter().collect();
        if !categories.contains_key(&ProductCategory::MOST_CONSERVATIVE) {
            return None;
        }
        Some(Self { categories })
    }

    /// Conservative estimates from historical Romanian retail-banking data
    pub fn default_bank() -> Self {
        let entries = [
            (ProductCategory::SavingsAccount, TierRates::new(0.02, 0.025, 0.03), 1),
            (ProductCategory::Deposit, TierRates::new(0.04, 0.045, 0.05), 1),
            (ProductCategory::InvestmentFund, TierRates::new(0.05, 0.07, 0.09), 4),
            (ProductCategory::PrivatePension, TierRates::new(0.04, 0.06, 0.08), 3),
            (ProductCategory::FixedIncome, TierRates::new(0.045, 0.05, 0.055), 2),
        ];

        Self {
            categories: entries
                .into_iter()
                .map(|(category, rates, risk_score)| (category, CategoryAssumption { rates, risk_score }))
                .collect(),
        }
    }

    fn lookup(&self, category: ProductCategory) -> Option<&CategoryAssumption> {
        self.categories
            .get(&category)
            .or_else(|| self.categories.get(&ProductCategory::MOST_CONSERVATIVE))
    }

    /// Assumed annual return for a category at a risk tier
    pub fn rate(&self, category: ProductCategory, tier: RiskTolerance) -> f64 {
        self.lookup(category)
            .map(|a| a.rates.for_tier(tier))
            .unwrap_or(0.0)
    }

    /// Risk score (1-4) for a category
    pub fn risk_score(&self, category: ProductCategory) -> f64 {
        self.lookup(category)
            .map(|a| f64::from(a.risk_score))
            .unwrap_or(1.0)
    }

    /// Number of categories the table knows about
    pub fn known_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn get(&self, category: ProductCategory) -> Option<&CategoryAssumption> {
        self.categories.get(&category)
    }
}

impl Default for ReturnTable {
    fn default() -> Self {
        Self::default_bank()
    }
}
