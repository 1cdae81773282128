//! Load user profiles from JSON documents or CSV exports

use super::{MaritalStatus, RiskTolerance, UserProfile};
use crate::error::{AnalyticsError, Result};
use csv::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row matching the profile export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "AnnualIncome")]
    annual_income: f64,
    #[serde(rename = "MaritalStatus", default)]
    marital_status: String,
    #[serde(rename = "HasChildren", default)]
    has_children: String,
    #[serde(rename = "NumberOfChildren", default)]
    number_of_children: u32,
    #[serde(rename = "EmploymentStatus", default)]
    employment_status: String,
    #[serde(rename = "RiskTolerance", default)]
    risk_tolerance: String,
    /// Goals separated by ';'
    #[serde(rename = "FinancialGoals", default)]
    financial_goals: String,
}

impl CsvRow {
    fn into_profile(self) -> Result<UserProfile> {
        let has_children = match self.has_children.trim().to_lowercase().as_str() {
            "" | "false" | "no" | "0" | "nu" => false,
            "true" | "yes" | "1" | "da" => true,
            other => return Err(AnalyticsError::invalid("HasChildren", other)),
        };

        let financial_goals = self
            .financial_goals
            .split(';')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(String::from)
            .collect();

        Ok(UserProfile {
            age: self.age,
            annual_income: self.annual_income,
            marital_status: MaritalStatus::parse_lenient(&self.marital_status),
            has_children,
            number_of_children: self.number_of_children,
            employment_status: self.employment_status,
            risk_tolerance: RiskTolerance::parse_lenient(&self.risk_tolerance),
            financial_goals,
        })
    }
}

/// Load profiles from a CSV file
pub fn load_profiles_csv(path: &Path) -> Result<Vec<UserProfile>> {
    let file = File::open(path).map_err(|e| AnalyticsError::io(path, e))?;
    load_profiles_from_reader(file)
}

/// Load profiles from any CSV reader
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<UserProfile>> {
    let mut rdr = Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in rdr.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.into_profile()?);
    }

    log::debug!("loaded {} profiles", profiles.len());
    Ok(profiles)
}

/// Load a single profile from a JSON file
pub fn load_profile_json(path: &Path) -> Result<UserProfile> {
    let file = File::open(path).map_err(|e| AnalyticsError::io(path, e))?;
    Ok(serde_json::from_reader(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Age,AnnualIncome,MaritalStatus,HasChildren,NumberOfChildren,EmploymentStatus,RiskTolerance,FinancialGoals
32,72000,Căsătorit/ă,da,1,Angajat,Medie,Educație copii; Pensionare
55,120000,single,false,0,Employed,high,
";

    #[test]
    fn test_load_profiles_from_reader() {
        let profiles = load_profiles_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 2);

        let first = &profiles[0];
        assert!(first.marital_status.is_married());
        assert_eq!(first.dependent_children(), 1);
        assert_eq!(first.risk_tolerance, RiskTolerance::Medium);
        assert_eq!(first.financial_goals, vec!["Educație copii", "Pensionare"]);

        let second = &profiles[1];
        assert_eq!(second.risk_tolerance, RiskTolerance::High);
        assert!(second.financial_goals.is_empty());
    }

    #[test]
    fn test_invalid_children_flag() {
        let data = "Age,AnnualIncome,HasChildren\n30,1000,maybe\n";
        let err = load_profiles_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidValue { field: "HasChildren", .. }));
    }
}
