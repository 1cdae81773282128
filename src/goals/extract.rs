//! Best-effort goal discovery in generated plan markdown
//!
//! The plan text comes from a language model, so its structure is not
//! guaranteed. Every miss degrades to an empty list; callers that can should
//! pass goals explicitly instead (see `GoalSource::Listed`).

use crate::profile::{RiskTolerance, UserProfile};
use serde::{Deserialize, Serialize};

/// Labels introducing the objectives section
const GOALS_HEADERS: [&str; 2] = ["**Obiective Financiare:**", "**Financial Goals:**"];

/// Heading prefix of product sections ("### 3.1", "### 3.2", ...)
const PRODUCT_SECTION_PREFIX: &str = "### 3.";

/// Goal horizon buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    /// 1-3 years
    Short,
    /// 3-7 years
    Medium,
    /// 7+ years
    Long,
}

impl Horizon {
    const ALL: [Horizon; 3] = [Horizon::Short, Horizon::Medium, Horizon::Long];

    fn markers(&self) -> &'static [&'static str] {
        match self {
            Horizon::Short => &["termen scurt", "short term", "short-term"],
            Horizon::Medium => &["termen mediu", "medium term", "medium-term"],
            Horizon::Long => &["termen lung", "long term", "long-term"],
        }
    }

    /// Detect a horizon marker line, returning the horizon and the text after
    /// the first colon that follows the marker
    fn detect(line: &str) -> Option<(Horizon, &str)> {
        Self::ALL.iter().find_map(|&horizon| {
            horizon.markers().iter().find_map(|marker| {
                let at = find_ignore_ascii_case(line, marker)?;
                let after_marker = &line[at + marker.len()..];
                let colon = after_marker.find(':')?;
                Some((horizon, &after_marker[colon + 1..]))
            })
        })
    }
}

/// Quantities extracted from a plan document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMetrics {
    pub total_products: usize,
    pub short_term_goals: Vec<String>,
    pub medium_term_goals: Vec<String>,
    pub long_term_goals: Vec<String>,
    pub monthly_income: f64,
    pub annual_income: f64,
    pub age: u32,
    pub has_children: bool,
    pub risk_level: RiskTolerance,
}

impl PlanMetrics {
    /// All goals, short term first
    pub fn all_goals(&self) -> impl Iterator<Item = &String> {
        self.short_term_goals
            .iter()
            .chain(&self.medium_term_goals)
            .chain(&self.long_term_goals)
    }

    pub fn goal_count(&self) -> usize {
        self.short_term_goals.len() + self.medium_term_goals.len() + self.long_term_goals.len()
    }
}

/// Extract plan metrics from markdown and the profile it was written for
pub fn extract_plan_metrics(plan_text: &str, profile: &UserProfile) -> PlanMetrics {
    let mut metrics = PlanMetrics {
        total_products: count_product_sections(plan_text),
        short_term_goals: Vec::new(),
        medium_term_goals: Vec::new(),
        long_term_goals: Vec::new(),
        monthly_income: profile.annual_income / 12.0,
        annual_income: profile.annual_income,
        age: profile.age,
        has_children: profile.has_children,
        risk_level: profile.risk_tolerance,
    };

    for (horizon, goal) in extract_goals(plan_text) {
        match horizon {
            Horizon::Short => metrics.short_term_goals.push(goal),
            Horizon::Medium => metrics.medium_term_goals.push(goal),
            Horizon::Long => metrics.long_term_goals.push(goal),
        }
    }

    if metrics.goal_count() == 0 {
        log::debug!("no goals found in plan text ({} bytes)", plan_text.len());
    }

    metrics
}

/// Count "### 3.N" product headings
pub fn count_product_sections(plan_text: &str) -> usize {
    plan_text
        .match_indices(PRODUCT_SECTION_PREFIX)
        .filter(|(at, prefix)| {
            plan_text[at + prefix.len()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
        })
        .count()
}

/// Goals listed under horizon markers inside the objectives section
pub fn extract_goals(plan_text: &str) -> Vec<(Horizon, String)> {
    let Some(section) = goals_section(plan_text) else {
        return Vec::new();
    };

    let mut goals = Vec::new();
    let mut current = None;

    for line in section.lines() {
        let header = if is_list_item(line) { None } else { Horizon::detect(line) };
        if let Some((horizon, rest)) = header {
            current = Some(horizon);
            if let Some(goal) = clean_goal(rest) {
                goals.push((horizon, goal));
            }
            continue;
        }

        if let (Some(horizon), Some(goal)) = (current, clean_goal(line)) {
            goals.push((horizon, goal));
        }
    }

    goals
}

/// Bullet lines ("- ", "* ", "• ") are always goals, never bucket headers;
/// "**" opens bold text instead
fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('-')
        || trimmed.starts_with('•')
        || (trimmed.starts_with('*') && !trimmed.starts_with("**"))
}

/// Text between the objectives header and the next "##" heading
fn goals_section(plan_text: &str) -> Option<&str> {
    let (start, header) = GOALS_HEADERS
        .iter()
        .find_map(|header| find_ignore_ascii_case(plan_text, header).map(|at| (at, *header)))?;

    let body = &plan_text[start + header.len()..];
    let end = body.find("\n##").unwrap_or(body.len());
    Some(&body[..end])
}

/// Strip list markers and emphasis; None for empty lines
fn clean_goal(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '*' | '•'));
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Byte offset of an ASCII needle, ignoring ASCII case
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
