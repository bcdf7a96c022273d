//! # Category Keys: The Five EU AI Act Risk Categories
//!
//! Defines the `CategoryKey` enum. The set is closed: the analysis service
//! scores every website against exactly these five categories, and every
//! `match` on `CategoryKey` is exhaustive so a sixth category would be a
//! compile error at each consumer.
//!
//! | # | Key | Label |
//! |---|-----|-------|
//! | 1 | `prohibited_ai_practices` | Prohibited AI Practices |
//! | 2 | `high_risk_ai_systems` | High-Risk AI Systems |
//! | 3 | `limited_risk_ai_systems` | Limited Risk AI Systems |
//! | 4 | `minimal_risk_ai_systems` | Minimal Risk AI Systems |
//! | 5 | `general_purpose_ai_models` | General Purpose AI Models |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the five EU AI Act risk categories a website is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    /// Practices banned outright by Article 5.
    ProhibitedAiPractices,
    /// Systems subject to conformity assessment.
    HighRiskAiSystems,
    /// Systems carrying transparency obligations.
    LimitedRiskAiSystems,
    /// Systems with minimal or no regulatory burden.
    MinimalRiskAiSystems,
    /// General purpose AI models.
    GeneralPurposeAiModels,
}

/// Number of category keys. Every report answers for exactly this many.
pub const CATEGORY_COUNT: usize = 5;

impl CategoryKey {
    /// All five categories in canonical order.
    pub fn all() -> &'static [CategoryKey; CATEGORY_COUNT] {
        &[
            Self::ProhibitedAiPractices,
            Self::HighRiskAiSystems,
            Self::LimitedRiskAiSystems,
            Self::MinimalRiskAiSystems,
            Self::GeneralPurposeAiModels,
        ]
    }

    /// The snake_case wire identifier. Matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProhibitedAiPractices => "prohibited_ai_practices",
            Self::HighRiskAiSystems => "high_risk_ai_systems",
            Self::LimitedRiskAiSystems => "limited_risk_ai_systems",
            Self::MinimalRiskAiSystems => "minimal_risk_ai_systems",
            Self::GeneralPurposeAiModels => "general_purpose_ai_models",
        }
    }

    /// Full label used on the single-report card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProhibitedAiPractices => "Prohibited AI Practices",
            Self::HighRiskAiSystems => "High-Risk AI Systems",
            Self::LimitedRiskAiSystems => "Limited Risk AI Systems",
            Self::MinimalRiskAiSystems => "Minimal Risk AI Systems",
            Self::GeneralPurposeAiModels => "General Purpose AI Models",
        }
    }

    /// Compact label used in the ranking list.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::ProhibitedAiPractices => "Prohibited AI",
            Self::HighRiskAiSystems => "High Risk",
            Self::LimitedRiskAiSystems => "Limited Risk",
            Self::MinimalRiskAiSystems => "Minimal Risk",
            Self::GeneralPurposeAiModels => "General AI",
        }
    }

    /// One-line description of what the category covers.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ProhibitedAiPractices => "Banned AI practices under EU AI Act",
            Self::HighRiskAiSystems => "High-risk AI systems requiring conformity assessment",
            Self::LimitedRiskAiSystems => "AI systems with transparency obligations",
            Self::MinimalRiskAiSystems => "Minimal or no risk AI systems",
            Self::GeneralPurposeAiModels => "General purpose AI models",
        }
    }

    /// Position in canonical order, usable as an array index.
    pub fn index(&self) -> usize {
        match self {
            Self::ProhibitedAiPractices => 0,
            Self::HighRiskAiSystems => 1,
            Self::LimitedRiskAiSystems => 2,
            Self::MinimalRiskAiSystems => 3,
            Self::GeneralPurposeAiModels => 4,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_five_unique_keys() {
        let keys = CategoryKey::all();
        assert_eq!(keys.len(), CATEGORY_COUNT);
        let mut seen = std::collections::HashSet::new();
        for k in keys {
            assert!(seen.insert(k), "duplicate key: {k}");
        }
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, k) in CategoryKey::all().iter().enumerate() {
            assert_eq!(k.index(), i);
        }
    }

    #[test]
    fn as_str_roundtrips_through_from_str() {
        for k in CategoryKey::all() {
            let parsed: CategoryKey = k.as_str().parse().unwrap();
            assert_eq!(*k, parsed);
        }
    }

    #[test]
    fn from_str_rejects_unknown_and_camel_case() {
        assert!("highRisk".parse::<CategoryKey>().is_err());
        assert!("PROHIBITED_AI_PRACTICES".parse::<CategoryKey>().is_err());
        assert_eq!(
            "".parse::<CategoryKey>(),
            Err(CoreError::UnknownCategory(String::new()))
        );
    }

    #[test]
    fn serde_format_matches_as_str() {
        for k in CategoryKey::all() {
            let json = serde_json::to_string(k).unwrap();
            assert_eq!(json, format!("\"{}\"", k.as_str()));
        }
    }

    #[test]
    fn labels_are_populated() {
        for k in CategoryKey::all() {
            assert!(!k.label().is_empty());
            assert!(!k.short_label().is_empty());
            assert!(!k.description().is_empty());
        }
        assert_eq!(CategoryKey::HighRiskAiSystems.label(), "High-Risk AI Systems");
        assert_eq!(CategoryKey::GeneralPurposeAiModels.short_label(), "General AI");
    }
}
