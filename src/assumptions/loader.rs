//! CSV-based assumption loader
//!
//! Loads planning assumptions from CSV files in data/assumptions/

use super::{CategoryAssumption, GoalAmount, GoalTarget, ProductCategory, TierRates};
use crate::error::{AnalyticsError, Result};
use crate::profile::RiskTolerance;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// Category risk scores run from cash-like (1) to equity-like (4)
const RISK_SCORE_RANGE: RangeInclusive<u8> = 1..=4;

/// Row of product_returns.csv
#[derive(Debug, Deserialize)]
struct ReturnRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Medium")]
    medium: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "RiskScore")]
    risk_score: u8,
}

/// Row of projection_rates.csv
#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Tier")]
    tier: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

/// Row of goal_targets.csv
#[derive(Debug, Deserialize)]
struct GoalRow {
    #[serde(rename = "Keyword")]
    keyword: String,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Row of parameters.csv
#[derive(Debug, Deserialize)]
struct ParameterRow {
    #[serde(rename = "Parameter")]
    name: String,
    #[serde(rename = "Value")]
    value: f64,
}

fn open_file(path: &Path, name: &str) -> Result<File> {
    let full = path.join(name);
    File::open(&full).map_err(|e| AnalyticsError::io(full, e))
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Load per-category returns and risk scores
/// Columns: Category,Low,Medium,High,RiskScore
pub fn load_product_returns(path: &Path) -> Result<Vec<(ProductCategory, CategoryAssumption)>> {
    product_returns_from_reader(open_file(path, "product_returns.csv")?)
}

pub fn product_returns_from_reader<R: Read>(reader: R) -> Result<Vec<(ProductCategory, CategoryAssumption)>> {
    let mut entries = Vec::new();

    for row in read_rows::<ReturnRow, _>(reader)? {
        let category: ProductCategory = row
            .category
            .parse()
            .map_err(|_| AnalyticsError::invalid("Category", row.category.as_str()))?;

        if !RISK_SCORE_RANGE.contains(&row.risk_score) {
            return Err(AnalyticsError::invalid("RiskScore", row.risk_score.to_string()));
        }

        let rates = TierRates::new(row.low, row.medium, row.high);
        if !rates.is_monotonic() {
            log::warn!("return rates for {} decrease with risk tier: {:?}", category, rates);
        }

        entries.push((category, CategoryAssumption { rates, risk_score: row.risk_score }));
    }

    Ok(entries)
}

/// Load the wealth-projection rate per risk tier
/// Columns: Tier,Rate
pub fn load_projection_rates(path: &Path) -> Result<TierRates> {
    projection_rates_from_reader(open_file(path, "projection_rates.csv")?)
}

pub fn projection_rates_from_reader<R: Read>(reader: R) -> Result<TierRates> {
    let mut rates = TierRates::new(0.04, 0.06, 0.08);

    for row in read_rows::<RateRow, _>(reader)? {
        let tier = RiskTolerance::parse_strict(&row.tier)
            .ok_or_else(|| AnalyticsError::invalid("Tier", row.tier.as_str()))?;
        match tier {
            RiskTolerance::Low => rates.low = row.rate,
            RiskTolerance::Medium => rates.medium = row.rate,
            RiskTolerance::High => rates.high = row.rate,
        }
    }

    Ok(rates)
}

/// Load goal keyword targets, in file order
/// Columns: Keyword,Amount (a number, or "emergency_fund")
pub fn load_goal_targets(path: &Path) -> Result<Vec<GoalTarget>> {
    goal_targets_from_reader(open_file(path, "goal_targets.csv")?)
}

pub fn goal_targets_from_reader<R: Read>(reader: R) -> Result<Vec<GoalTarget>> {
    read_rows::<GoalRow, _>(reader)?
        .into_iter()
        .map(|row| -> Result<GoalTarget> {
            let amount = match row.amount.as_str() {
                "emergency_fund" => GoalAmount::EmergencyFund,
                raw => GoalAmount::Fixed(
                    raw.parse::<f64>()
                        .map_err(|_| AnalyticsError::invalid("Amount", raw))?,
                ),
            };
            Ok(GoalTarget {
                keyword: row.keyword.to_lowercase(),
                amount,
            })
        })
        .collect()
}

/// Load scalar planning parameters
/// Columns: Parameter,Value
pub fn load_parameters(path: &Path) -> Result<HashMap<String, f64>> {
    let rows: Vec<ParameterRow> = read_rows(open_file(path, "parameters.csv")?)?;
    Ok(rows.into_iter().map(|row| (row.name, row.value)).collect())
}

/// Raw tables loaded from an assumptions directory
pub struct LoadedAssumptions {
    pub product_returns: Vec<(ProductCategory, CategoryAssumption)>,
    pub projection_rates: TierRates,
    pub goal_targets: Vec<GoalTarget>,
    pub parameters: HashMap<String, f64>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("loading assumptions from {}", path.display());
        Ok(Self {
            product_returns: load_product_returns(path)?,
            projection_rates: load_projection_rates(path)?,
            goal_targets: load_goal_targets(path)?,
            parameters: load_parameters(path)?,
        })
    }

    /// Parameter value, or `default` when the file leaves it out
    pub fn parameter(&self, name: &str, default: f64) -> f64 {
        self.parameters.get(name).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_assumptions() {
        let result = LoadedAssumptions::load_default();
        assert!(result.is_ok(), "Failed to load assumptions: {:?}", result.err());

        let loaded = result.unwrap();

        assert_eq!(loaded.product_returns.len(), 5);
        assert!(loaded
            .product_returns
            .iter()
            .any(|(c, _)| *c == ProductCategory::MOST_CONSERVATIVE));

        assert_eq!(loaded.projection_rates.medium, 0.06);
        assert!(!loaded.goal_targets.is_empty());
        assert_eq!(loaded.parameter("risk_free_rate", 0.0), 0.02);
        assert_eq!(loaded.parameter("not_a_parameter", 1.5), 1.5);
    }

    #[test]
    fn test_short_column_file_is_an_error() {
        let data = "Category,Low,Medium,High\nsavings_account,0.02,0.025,0.03\n";
        let err = product_returns_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Csv(_)));

        let ragged = "Category,Low,Medium,High,RiskScore\nsavings_account,0.02,0.025\n";
        let err = product_returns_from_reader(ragged.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyticsError::Csv(_)));
    }

    #[test]
    fn test_short_column_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["projection_rates.csv", "goal_targets.csv", "parameters.csv"] {
            std::fs::copy(Path::new(DEFAULT_ASSUMPTIONS_PATH).join(name), dir.path().join(name)).unwrap();
        }
        std::fs::write(
            dir.path().join("product_returns.csv"),
            "Category,Low,Medium,High\nsavings_account,0.02,0.025,0.03\n",
        )
        .unwrap();

        assert!(LoadedAssumptions::load_from(dir.path()).is_err());
    }

    #[test]
    fn test_risk_score_out_of_range() {
        for score in ["0", "5"] {
            let data = format!("Category,Low,Medium,High,RiskScore\ndeposit,0.04,0.045,0.05,{score}\n");
            let err = product_returns_from_reader(data.as_bytes()).unwrap_err();
            assert!(matches!(err, AnalyticsError::InvalidValue { field: "RiskScore", .. }));
        }

        let data = "Category,Low,Medium,High,RiskScore\ndeposit, 0.04, 0.045, 0.05, 4\n";
        let entries = product_returns_from_reader(data.as_bytes()).unwrap();
        assert_eq!(entries[0].1.risk_score, 4);
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let data = "Tier,Rate\nlow,0.03\nhihg,0.09\n";
        let err = projection_rates_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidValue { field: "Tier", .. }));

        let rates = projection_rates_from_reader("Tier,Rate\nRidicată,0.09\n".as_bytes()).unwrap();
        assert_eq!(rates.high, 0.09);
        assert_eq!(rates.medium, 0.06);
    }

    #[test]
    fn test_goal_targets_from_reader() {
        let data = "Keyword,Amount\nCasă,200000\nfond urgență,emergency_fund\n";
        let targets = goal_targets_from_reader(data.as_bytes()).unwrap();
        assert_eq!(targets[0].keyword, "casă");
        assert_eq!(targets[1].amount, GoalAmount::EmergencyFund);

        let err = goal_targets_from_reader("Keyword,Amount\nx,lots\n".as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidValue { field: "Amount", .. }));
    }

    #[test]
    fn test_missing_directory() {
        let err = LoadedAssumptions::load_from(Path::new("does/not/exist")).err().unwrap();
        assert!(matches!(err, AnalyticsError::Io { .. }));
    }
}
