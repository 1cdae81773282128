//! Target amounts for common financial goals

use serde::{Deserialize, Serialize};

/// Amount attached to a goal keyword
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalAmount {
    /// A fixed amount in RON
    Fixed(f64),
    /// The profile's own emergency-fund target
    EmergencyFund,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalTarget {
    /// Lowercase substring matched against the goal label
    pub keyword: String,
    pub amount: GoalAmount,
}

/// Keyword → target amount lookup, first match wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCatalog {
    pub targets: Vec<GoalTarget>,
    /// Used when no keyword matches
    pub default_amount: f64,
}

impl GoalCatalog {
    pub fn new(targets: Vec<GoalTarget>, default_amount: f64) -> Self {
        Self { targets, default_amount }
    }

    /// Conservative amounts in RON (home figure is a 30% down payment on 500K)
    pub fn default_bank() -> Self {
        use GoalAmount::*;

        let targets = [
            ("economii pe termen scurt", Fixed(15_000.0)),
            ("short-term savings", Fixed(15_000.0)),
            ("economii pe termen lung", Fixed(100_000.0)),
            ("long-term savings", Fixed(100_000.0)),
            ("investiții", Fixed(50_000.0)),
            ("investment", Fixed(50_000.0)),
            ("cumpărare casă", Fixed(150_000.0)),
            ("cumpărare locuință", Fixed(150_000.0)),
            ("home purchase", Fixed(150_000.0)),
            ("buy a home", Fixed(150_000.0)),
            ("educație copii", Fixed(80_000.0)),
            ("children's education", Fixed(80_000.0)),
            ("pensionare", Fixed(500_000.0)),
            ("retirement", Fixed(500_000.0)),
            ("călătorii", Fixed(20_000.0)),
            ("travel", Fixed(20_000.0)),
            ("achiziții mari", Fixed(30_000.0)),
            ("major purchase", Fixed(30_000.0)),
            ("fond urgență", EmergencyFund),
            ("emergency fund", EmergencyFund),
        ];

        Self::new(
            targets
                .into_iter()
                .map(|(keyword, amount)| GoalTarget { keyword: keyword.to_string(), amount })
                .collect(),
            50_000.0,
        )
    }

    /// Resolve a goal label to a target amount
    pub fn target_for(&self, goal: &str, emergency_fund_target: f64) -> f64 {
        let label = goal.to_lowercase();
        self.targets
            .iter()
            .find(|t| label.contains(&t.keyword))
            .map(|t| match t.amount {
                GoalAmount::Fixed(amount) => amount,
                GoalAmount::EmergencyFund => emergency_fund_target,
            })
            .unwrap_or(self.default_amount)
    }
}

impl Default for GoalCatalog {
    fn default() -> Self {
        Self::default_bank()
    }
}
