//! Energy categories and confidence levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mental-energy demand of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnergyCategory {
    /// Complex thinking, creativity, problem-solving
    Deep,
    /// Focused execution of known work
    Steady,
    /// Light attention, minimal effort
    Low,
    /// Routine, can be done on autopilot
    None,
}

impl EnergyCategory {
    /// All categories in display order.
    pub const ALL: [EnergyCategory; 4] = [
        EnergyCategory::Deep,
        EnergyCategory::Steady,
        EnergyCategory::Low,
        EnergyCategory::None,
    ];

    /// Wire name, e.g. `"DEEP"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyCategory::Deep => "DEEP",
            EnergyCategory::Steady => "STEADY",
            EnergyCategory::Low => "LOW",
            EnergyCategory::None => "NONE",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            EnergyCategory::Deep => "Deep Focus",
            EnergyCategory::Steady => "Steady Work",
            EnergyCategory::Low => "Low Energy",
            EnergyCategory::None => "No Brainer",
        }
    }

    /// Lead sentence of the classification explanation.
    pub fn description(&self) -> &'static str {
        match self {
            EnergyCategory::Deep => {
                "This task involves complex thinking, creativity, or problem-solving"
            }
            EnergyCategory::Steady => "This task requires focused, steady execution",
            EnergyCategory::Low => "This task needs light attention and minimal mental effort",
            EnergyCategory::None => "This task is routine and can be done on autopilot",
        }
    }
}

impl fmt::Display for EnergyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown energy category '{}' (expected DEEP, STEADY, LOW or NONE)",
            self.0
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for EnergyCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEEP" => Ok(EnergyCategory::Deep),
            "STEADY" => Ok(EnergyCategory::Steady),
            "LOW" => Ok(EnergyCategory::Low),
            "NONE" => Ok(EnergyCategory::None),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// How sure the classifier is about its pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Confidence for the winning score.
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => Confidence::Low,
            1..=2 => Confidence::Medium,
            _ => Confidence::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("deep".parse::<EnergyCategory>(), Ok(EnergyCategory::Deep));
        assert_eq!(" Steady ".parse::<EnergyCategory>(), Ok(EnergyCategory::Steady));
        assert!("medium".parse::<EnergyCategory>().is_err());
    }

    #[test]
    fn serializes_wire_names() {
        assert_eq!(serde_json::to_string(&EnergyCategory::None).unwrap(), "\"NONE\"");
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), "\"medium\"");
        let parsed: EnergyCategory = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(parsed, EnergyCategory::Low);
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(Confidence::from_score(0), Confidence::Low);
        assert_eq!(Confidence::from_score(1), Confidence::Medium);
        assert_eq!(Confidence::from_score(2), Confidence::Medium);
        assert_eq!(Confidence::from_score(3), Confidence::High);
    }
}
