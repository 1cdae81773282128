//! User profile data structures as collected by the onboarding form

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk tolerance tier
///
/// Parsed leniently: English and Romanian labels are accepted in any case,
/// anything unrecognised falls back to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High];

    /// Parse a known tier label; None for anything else
    pub fn parse_strict(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" | "scăzută" | "scazuta" | "conservative" => Some(RiskTolerance::Low),
            "medium" | "medie" | "moderate" => Some(RiskTolerance::Medium),
            "high" | "ridicată" | "ridicata" | "aggressive" => Some(RiskTolerance::High),
            _ => None,
        }
    }

    /// Parse a tier label, defaulting to `Medium`
    pub fn parse_lenient(label: &str) -> Self {
        Self::parse_strict(label).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }
}

impl From<String> for RiskTolerance {
    fn from(label: String) -> Self {
        Self::parse_lenient(&label)
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marital status as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MaritalStatus {
    Married,
    #[default]
    Single,
    /// Any other label (divorced, widowed, ...), kept verbatim
    Other(String),
}

impl MaritalStatus {
    pub fn parse_lenient(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "married" | "căsătorit/ă" | "casatorit/a" | "căsătorit" | "casatorit" => MaritalStatus::Married,
            "" | "single" | "necăsătorit/ă" | "necasatorit/a" => MaritalStatus::Single,
            _ => MaritalStatus::Other(label.trim().to_string()),
        }
    }

    pub fn is_married(&self) -> bool {
        matches!(self, MaritalStatus::Married)
    }
}

impl From<String> for MaritalStatus {
    fn from(label: String) -> Self {
        Self::parse_lenient(&label)
    }
}

impl From<MaritalStatus> for String {
    fn from(status: MaritalStatus) -> Self {
        match status {
            MaritalStatus::Married => "married".to_string(),
            MaritalStatus::Single => "single".to_string(),
            MaritalStatus::Other(label) => label,
        }
    }
}

/// A user's financial profile
///
/// Input only: the engine borrows it and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,

    /// Gross annual income; negative values are treated as zero
    pub annual_income: f64,

    #[serde(default)]
    pub marital_status: MaritalStatus,

    #[serde(default)]
    pub has_children: bool,

    #[serde(default)]
    pub number_of_children: u32,

    #[serde(default)]
    pub employment_status: String,

    #[serde(default)]
    pub risk_tolerance: RiskTolerance,

    /// Free-text goal labels picked during onboarding
    #[serde(default)]
    pub financial_goals: Vec<String>,
}

impl UserProfile {
    /// Create a profile with the fields the analytics depend on
    pub fn new(age: u32, annual_income: f64, risk_tolerance: RiskTolerance) -> Self {
        Self {
            age,
            annual_income,
            marital_status: MaritalStatus::Single,
            has_children: false,
            number_of_children: 0,
            employment_status: String::new(),
            risk_tolerance,
            financial_goals: Vec::new(),
        }
    }

    pub fn married(mut self) -> Self {
        self.marital_status = MaritalStatus::Married;
        self
    }

    pub fn with_children(mut self, count: u32) -> Self {
        self.has_children = count > 0;
        self.number_of_children = count;
        self
    }

    /// Children counted by the expense model
    ///
    /// Both the flag and the count must agree; a count without the flag is ignored.
    pub fn dependent_children(&self) -> u32 {
        if self.has_children {
            self.number_of_children
        } else {
            0
        }
    }

    /// Annual income clamped at zero
    pub fn income(&self) -> f64 {
        self.annual_income.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tolerance_parsing() {
        assert_eq!(RiskTolerance::parse_lenient("LOW"), RiskTolerance::Low);
        assert_eq!(RiskTolerance::parse_lenient("Ridicată"), RiskTolerance::High);
        assert_eq!(RiskTolerance::parse_lenient("medie"), RiskTolerance::Medium);
        assert_eq!(RiskTolerance::parse_lenient("whatever"), RiskTolerance::Medium);
        assert_eq!(RiskTolerance::parse_strict("whatever"), None);
        assert_eq!(RiskTolerance::parse_strict(" Medie "), Some(RiskTolerance::Medium));
    }

    #[test]
    fn test_marital_status_parsing() {
        assert!(MaritalStatus::parse_lenient("Căsătorit/ă").is_married());
        assert!(MaritalStatus::parse_lenient("married").is_married());
        assert_eq!(MaritalStatus::parse_lenient("necăsătorit/ă"), MaritalStatus::Single);
        assert_eq!(
            MaritalStatus::parse_lenient("Divorced"),
            MaritalStatus::Other("Divorced".to_string())
        );
    }

    #[test]
    fn test_profile_deserialize_defaults() {
        let json = r#"{"age": 40, "annual_income": 60000, "risk_tolerance": "High"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.age, 40);
        assert_eq!(profile.risk_tolerance, RiskTolerance::High);
        assert_eq!(profile.marital_status, MaritalStatus::Single);
        assert_eq!(profile.dependent_children(), 0);
        assert!(profile.financial_goals.is_empty());
    }

    #[test]
    fn test_children_need_flag() {
        let mut profile = UserProfile::new(30, 50_000.0, RiskTolerance::Low);
        profile.number_of_children = 2;
        assert_eq!(profile.dependent_children(), 0);

        let profile = profile.with_children(2);
        assert_eq!(profile.dependent_children(), 2);
    }

    #[test]
    fn test_negative_income_clamped() {
        let profile = UserProfile::new(30, -10_000.0, RiskTolerance::Low);
        assert_eq!(profile.income(), 0.0);
    }
}
