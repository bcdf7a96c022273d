//! # Compliance Reports and Main-Score Derivation
//!
//! [`ComplianceReport`] is the record the analysis service returns for one
//! website. Its [`CategoryScores`] carry one optional score per
//! [`CategoryKey`]; the service is an independently evolving collaborator,
//! so every field tolerates absence:
//!
//! | Field | Missing / `null` reads as |
//! |-------|---------------------------|
//! | a category score | `0.0` |
//! | `category_scores` | all five scores absent |
//! | `website_description` | empty string |
//! | `website_url` | empty string |
//!
//! The main score is never stored. It is recomputed from the five category
//! scores on every call to [`CategoryScores::main_score`], so it cannot
//! drift out of sync with the values it summarizes.

use serde::{Deserialize, Serialize};

use crate::category::{CategoryKey, CATEGORY_COUNT};
use crate::risk::{RiskBucket, RiskScale};

/// Lowest valid category score.
pub const SCORE_MIN: f64 = 0.0;

/// Highest valid category score. A main score at this value is the ceiling.
pub const SCORE_MAX: f64 = 10.0;

/// Per-category scores of one report. Absent entries read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prohibited_ai_practices: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_risk_ai_systems: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited_risk_ai_systems: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimal_risk_ai_systems: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_purpose_ai_models: Option<f64>,
}

impl CategoryScores {
    /// Build a fully populated score set, values in canonical key order.
    pub fn from_values(values: [f64; CATEGORY_COUNT]) -> Self {
        let mut scores = Self::default();
        for (key, value) in CategoryKey::all().iter().zip(values) {
            scores.set(*key, value);
        }
        scores
    }

    fn slot(&self, key: CategoryKey) -> &Option<f64> {
        match key {
            CategoryKey::ProhibitedAiPractices => &self.prohibited_ai_practices,
            CategoryKey::HighRiskAiSystems => &self.high_risk_ai_systems,
            CategoryKey::LimitedRiskAiSystems => &self.limited_risk_ai_systems,
            CategoryKey::MinimalRiskAiSystems => &self.minimal_risk_ai_systems,
            CategoryKey::GeneralPurposeAiModels => &self.general_purpose_ai_models,
        }
    }

    fn slot_mut(&mut self, key: CategoryKey) -> &mut Option<f64> {
        match key {
            CategoryKey::ProhibitedAiPractices => &mut self.prohibited_ai_practices,
            CategoryKey::HighRiskAiSystems => &mut self.high_risk_ai_systems,
            CategoryKey::LimitedRiskAiSystems => &mut self.limited_risk_ai_systems,
            CategoryKey::MinimalRiskAiSystems => &mut self.minimal_risk_ai_systems,
            CategoryKey::GeneralPurposeAiModels => &mut self.general_purpose_ai_models,
        }
    }

    /// The score as delivered, `None` when the service omitted it.
    pub fn raw(&self, key: CategoryKey) -> Option<f64> {
        *self.slot(key)
    }

    /// The effective score: the delivered value, or `0.0` when absent.
    pub fn get(&self, key: CategoryKey) -> f64 {
        self.raw(key).unwrap_or(SCORE_MIN)
    }

    pub fn set(&mut self, key: CategoryKey, value: f64) {
        *self.slot_mut(key) = Some(value);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: CategoryKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Effective scores for all five keys in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, f64)> + '_ {
        CategoryKey::all().iter().map(move |k| (*k, self.get(*k)))
    }

    /// Keys the service did not score.
    pub fn missing(&self) -> Vec<CategoryKey> {
        CategoryKey::all()
            .iter()
            .copied()
            .filter(|k| self.raw(*k).is_none())
            .collect()
    }

    /// Maximum of the five effective scores. A negative zero comes back as
    /// `0.0` so that it orders equal to a positive zero.
    pub fn main_score(&self) -> f64 {
        self.iter()
            .map(|(_, score)| score)
            .fold(f64::NEG_INFINITY, f64::max)
            + 0.0
    }

    /// First category (canonical order) whose score equals the main score.
    pub fn dominant_category(&self) -> CategoryKey {
        let main = self.main_score();
        self.iter()
            .find(|(_, score)| *score == main)
            .map(|(key, _)| key)
            .unwrap_or(CategoryKey::ProhibitedAiPractices)
    }

    /// Clamp every delivered score into `[SCORE_MIN, SCORE_MAX]`, returning
    /// the keys that had to be adjusted. Absent scores stay absent.
    pub fn clamp_to_range(&mut self) -> Vec<CategoryKey> {
        let mut adjusted = Vec::new();
        for key in CategoryKey::all() {
            if let Some(value) = self.slot_mut(*key) {
                // `+ 0.0` turns -0.0 into 0.0; that is not reported as an adjustment.
                let clamped = value.clamp(SCORE_MIN, SCORE_MAX) + 0.0;
                if clamped != *value {
                    adjusted.push(*key);
                }
                *value = clamped;
            }
        }
        adjusted
    }
}

/// Analysis result for one website.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    #[serde(default, alias = "websiteUrl")]
    pub website_url: String,
    #[serde(default, alias = "websiteSummary")]
    pub website_description: String,
    #[serde(default)]
    pub category_scores: CategoryScores,
}

impl ComplianceReport {
    pub fn new(
        website_url: impl Into<String>,
        website_description: impl Into<String>,
        category_scores: CategoryScores,
    ) -> Self {
        Self {
            website_url: website_url.into(),
            website_description: website_description.into(),
            category_scores,
        }
    }

    pub fn main_score(&self) -> f64 {
        self.category_scores.main_score()
    }

    pub fn dominant_category(&self) -> CategoryKey {
        self.category_scores.dominant_category()
    }

    /// Bucket of the main score on the given scale.
    pub fn risk(&self, scale: RiskScale) -> RiskBucket {
        scale.classify(self.main_score())
    }

    /// True when the main score sits at the top of the scale, the case in
    /// which the prohibited-practices line is flagged on the report card.
    pub fn at_ceiling(&self) -> bool {
        self.main_score() >= SCORE_MAX
    }

    /// Boundary validation for reports received from the analysis service:
    /// out-of-range scores are clamped into `[0, 10]` and logged.
    pub fn sanitized(mut self) -> Self {
        let adjusted = self.category_scores.clamp_to_range();
        if !adjusted.is_empty() {
            let keys: Vec<&str> = adjusted.iter().map(|k| k.as_str()).collect();
            tracing::warn!(
                website_url = %self.website_url,
                categories = ?keys,
                "category scores outside [0, 10] were clamped"
            );
        }
        self
    }
}

/// The two shapes a stored report list arrives in: the service envelope
/// `{"results": [...]}` or a bare JSON array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ReportListShape {
    Envelope {
        #[serde(default)]
        results: Vec<ComplianceReport>,
    },
    Bare(Vec<ComplianceReport>),
}

/// Parse a report list from JSON text in either accepted shape. Reports are
/// sanitized on the way in.
pub fn parse_report_list(json: &str) -> Result<Vec<ComplianceReport>, serde_json::Error> {
    let reports = match serde_json::from_str::<ReportListShape>(json)? {
        ReportListShape::Envelope { results } => results,
        ReportListShape::Bare(reports) => reports,
    };
    Ok(reports.into_iter().map(ComplianceReport::sanitized).collect())
}
