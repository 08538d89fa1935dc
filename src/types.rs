//! Core data types for the auditor.
//!
//! These types represent the per-clause verdicts returned by the annotation
//! model and the aggregated audit that the report writers consume.

use serde::{Deserialize, Serialize};

use crate::config::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
use crate::segment::Clause;

/// Risk label attached to a clause or to the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    High,
    Medium,
    Low,
}

impl RiskLabel {
    /// Get the display string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Band a 0-100 score into a label.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score > HIGH_RISK_THRESHOLD {
            Self::High
        } else if score > MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Parse from model output, tolerating case variations.
    #[must_use]
    pub fn from_model_str(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" | "med" => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Deontic modality of a clause, as judged by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    Obligation,
    Right,
    Prohibition,
    Definition,
}

impl Modality {
    /// Get the display string used in reports.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Obligation => "OBLIGATION",
            Self::Right => "RIGHT",
            Self::Prohibition => "PROHIBITION",
            Self::Definition => "DEFINITION",
        }
    }

    /// Parse from model output. Unknown values default to obligation,
    /// the most conservative reading for a contract clause.
    #[must_use]
    pub fn from_model_str(text: &str) -> Self {
        match text.trim().to_uppercase().as_str() {
            "RIGHT" => Self::Right,
            "PROHIBITION" => Self::Prohibition,
            "DEFINITION" => Self::Definition,
            _ => Self::Obligation,
        }
    }
}

/// Clause categories the model picks from.
pub const CLAUSE_CATEGORIES: [&str; 12] = [
    "Termination",
    "Indemnity",
    "Non-Compete",
    "Penalty",
    "Arbitration",
    "Payment",
    "Liability",
    "Intellectual Property",
    "Auto-Renewal",
    "Lock-in",
    "Confidentiality",
    "General",
];

/// Structured verdict for a single clause.
///
/// Fields are lenient on deserialization: the model occasionally omits keys,
/// and a missing field must not sink the whole clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    /// Category from [`CLAUSE_CATEGORIES`].
    #[serde(default = "default_category")]
    pub clause_type: String,

    /// Deontic modality.
    #[serde(default = "default_modality", deserialize_with = "lenient_modality")]
    pub modality: Modality,

    /// Whether the model flagged the wording as ambiguous.
    #[serde(default)]
    pub is_ambiguous: bool,

    /// Risk score, 0-100.
    #[serde(default = "default_score", deserialize_with = "lenient_score")]
    pub score: u8,

    /// Risk label, usually consistent with the score.
    #[serde(default = "default_label", deserialize_with = "lenient_label")]
    pub label: RiskLabel,

    /// Short risk explanation.
    #[serde(default = "default_explanation")]
    pub explanation: String,

    /// How the clause deviates from market standard.
    #[serde(default = "default_deviation")]
    pub deviation: String,

    /// Suggested safer rewrite.
    #[serde(default = "default_alternative")]
    pub alternative_clause: String,

    /// Statutory citation, when the model offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<String>,

    /// Display title, when the model offers a better one than the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clause_title: Option<String>,
}

fn default_category() -> String {
    "General".to_string()
}

fn default_modality() -> Modality {
    Modality::Obligation
}

fn default_score() -> u8 {
    10
}

fn default_label() -> RiskLabel {
    RiskLabel::Low
}

fn default_explanation() -> String {
    "Standard clause.".to_string()
}

fn default_deviation() -> String {
    "None".to_string()
}

fn default_alternative() -> String {
    "N/A".to_string()
}

/// Accept modality as any string casing, or reject-to-default on wrong type.
fn lenient_modality<'de, D>(deserializer: D) -> std::result::Result<Modality, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer).unwrap_or_default();
    Ok(Modality::from_model_str(&raw))
}

/// Accept the label as any string casing.
fn lenient_label<'de, D>(deserializer: D) -> std::result::Result<RiskLabel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer).unwrap_or_default();
    Ok(RiskLabel::from_model_str(&raw))
}

/// Accept the score as an integer or float, clamped to 0-100.
fn lenient_score<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer).unwrap_or(0.0);
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

impl ClauseAnalysis {
    /// Fixed low-risk verdict used when the model call or parse fails.
    ///
    /// The downstream report must always have one verdict per clause, so
    /// annotation degrades to this instead of erroring.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            clause_type: default_category(),
            modality: default_modality(),
            is_ambiguous: false,
            score: default_score(),
            label: default_label(),
            explanation: default_explanation(),
            deviation: default_deviation(),
            alternative_clause: default_alternative(),
            legal_reference: None,
            clause_title: None,
        }
    }
}

/// A clause paired with its verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseReview {
    /// Detected or synthesized clause header.
    pub header: String,

    /// Original clause content as segmented.
    pub original: String,

    /// True if the clause was machine-translated before annotation.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub translated: bool,

    /// Model verdict.
    pub analysis: ClauseAnalysis,
}

impl ClauseReview {
    /// Pair a clause with its verdict.
    #[must_use]
    pub fn new(clause: &Clause, analysis: ClauseAnalysis) -> Self {
        Self {
            header: clause.header.clone(),
            original: clause.content.clone(),
            translated: false,
            analysis,
        }
    }

    /// Mark the review as based on a translated clause.
    #[must_use]
    pub fn with_translated(mut self, translated: bool) -> Self {
        self.translated = translated;
        self
    }

    /// Title to display: the model's smart title when present, else the header.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.analysis
            .clause_title
            .as_deref()
            .unwrap_or(&self.header)
    }
}

/// Entities scanned from the raw document text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub parties: Vec<String>,
    pub financials: Vec<String>,
    pub jurisdiction: Vec<String>,
    pub dates: Vec<String>,
}

/// Complete audit of one contract document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractAudit {
    /// When the audit ran.
    pub timestamp: chrono::DateTime<chrono::Local>,

    /// Classified document type (e.g. "Employment Agreement").
    pub document_type: String,

    /// Mean clause risk score, 0-100.
    pub risk_score: u8,

    /// Executive summary from the model, empty if unavailable.
    #[serde(default)]
    pub summary: String,

    /// Entities scanned from the document.
    pub entities: EntitySet,

    /// Per-clause verdicts, in document order.
    pub detailed_analysis: Vec<ClauseReview>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_risk_label_from_score() {
        assert_eq!(RiskLabel::from_score(0), RiskLabel::Low);
        assert_eq!(RiskLabel::from_score(30), RiskLabel::Low);
        assert_eq!(RiskLabel::from_score(31), RiskLabel::Medium);
        assert_eq!(RiskLabel::from_score(70), RiskLabel::Medium);
        assert_eq!(RiskLabel::from_score(71), RiskLabel::High);
        assert_eq!(RiskLabel::from_score(100), RiskLabel::High);
    }

    #[test]
    fn test_risk_label_from_model_str() {
        assert_eq!(RiskLabel::from_model_str("High"), RiskLabel::High);
        assert_eq!(RiskLabel::from_model_str("HIGH"), RiskLabel::High);
        assert_eq!(RiskLabel::from_model_str(" medium "), RiskLabel::Medium);
        assert_eq!(RiskLabel::from_model_str("garbage"), RiskLabel::Low);
    }

    #[test]
    fn test_modality_from_model_str() {
        assert_eq!(Modality::from_model_str("right"), Modality::Right);
        assert_eq!(
            Modality::from_model_str("PROHIBITION"),
            Modality::Prohibition
        );
        assert_eq!(Modality::from_model_str("definition"), Modality::Definition);
        // Unknown defaults to obligation
        assert_eq!(Modality::from_model_str("whatever"), Modality::Obligation);
    }

    #[test]
    fn test_clause_analysis_full_deserialization() {
        let json = r#"{
            "clause_type": "Indemnity",
            "modality": "OBLIGATION",
            "is_ambiguous": true,
            "score": 85,
            "label": "High",
            "explanation": "Uncapped indemnity.",
            "deviation": "Broader than market standard",
            "alternative_clause": "Cap indemnity at fees paid.",
            "legal_reference": "Indian Contract Act, Section 124"
        }"#;

        let analysis: ClauseAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.clause_type, "Indemnity");
        assert_eq!(analysis.modality, Modality::Obligation);
        assert!(analysis.is_ambiguous);
        assert_eq!(analysis.score, 85);
        assert_eq!(analysis.label, RiskLabel::High);
        assert_eq!(
            analysis.legal_reference.as_deref(),
            Some("Indian Contract Act, Section 124")
        );
    }

    #[test]
    fn test_clause_analysis_lenient_deserialization() {
        // Missing fields and odd casings must not fail
        let json = r#"{"clause_type": "Payment", "score": 42.7, "label": "medium"}"#;
        let analysis: ClauseAnalysis = serde_json::from_str(json).unwrap();

        assert_eq!(analysis.clause_type, "Payment");
        assert_eq!(analysis.score, 43);
        assert_eq!(analysis.label, RiskLabel::Medium);
        assert_eq!(analysis.modality, Modality::Obligation);
        assert_eq!(analysis.explanation, "Standard clause.");
    }

    #[test]
    fn test_clause_analysis_empty_object() {
        let analysis: ClauseAnalysis = serde_json::from_str("{}").unwrap();
        assert_eq!(analysis, ClauseAnalysis::fallback());
    }

    #[test]
    fn test_clause_analysis_score_clamped() {
        let json = r#"{"score": 250}"#;
        let analysis: ClauseAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.score, 100);
    }

    #[test]
    fn test_clause_review_display_title() {
        let clause = Clause::new("4. Indemnity", "The vendor shall indemnify...");
        let mut analysis = ClauseAnalysis::fallback();
        let review = ClauseReview::new(&clause, analysis.clone());
        assert_eq!(review.display_title(), "4. Indemnity");

        analysis.clause_title = Some("Uncapped Vendor Indemnity".to_string());
        let review = ClauseReview::new(&clause, analysis);
        assert_eq!(review.display_title(), "Uncapped Vendor Indemnity");
    }
}
