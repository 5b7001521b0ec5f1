//! Validation-report extraction.
//!
//! A validation report is free-form model output carrying up to three
//! recognized sections: a numeric score, a recommendation verdict, and a
//! bulleted list of flagged discrepancies under a "POTENTIAL HALLUCINATIONS"
//! heading. Extraction is best-effort with documented defaults; it never
//! fails, whatever the input looks like.

pub mod extract;

pub use extract::extract_report;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default score substituted when no score label is found.
pub const DEFAULT_SCORE: u32 = 5;

/// Reviewer verdict extracted from a report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Approve,
    ReviewNeeded,
    Reject,
}

impl Recommendation {
    /// Parse a label as it appears in report text. Whitespace and
    /// underscore variants of REVIEW NEEDED are both accepted.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .trim()
            .to_uppercase()
            .split(|c: char| c.is_whitespace() || c == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");

        match normalized.as_str() {
            "APPROVE" => Some(Self::Approve),
            "REVIEW_NEEDED" => Some(Self::ReviewNeeded),
            "REJECT" => Some(Self::Reject),
            _ => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Approve => "APPROVE",
            Self::ReviewNeeded => "REVIEW_NEEDED",
            Self::Reject => "REJECT",
        };
        write!(f, "{label}")
    }
}

impl Default for Recommendation {
    fn default() -> Self {
        Self::ReviewNeeded
    }
}

/// Structured fields extracted from one validation report.
///
/// `raw_text` carries the original report unmodified so the presentation
/// layer can display it for audit alongside the typed fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Score as parsed; 0-10 in well-formed reports, but out-of-range
    /// values are kept rather than clamped.
    pub score: u32,

    /// Verdict; `REVIEW_NEEDED` when absent or unrecognized.
    pub recommendation: Recommendation,

    /// Flagged discrepancies in source order. Empty when the section is
    /// missing or contains the "none detected" sentinel.
    pub flagged_items: Vec<String>,

    /// The report text exactly as received.
    pub raw_text: String,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            score: DEFAULT_SCORE,
            recommendation: Recommendation::default(),
            flagged_items: Vec::new(),
            raw_text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_labels() {
        assert_eq!(
            Recommendation::from_label("APPROVE"),
            Some(Recommendation::Approve)
        );
        assert_eq!(
            Recommendation::from_label("REVIEW NEEDED"),
            Some(Recommendation::ReviewNeeded)
        );
        assert_eq!(
            Recommendation::from_label("review_needed"),
            Some(Recommendation::ReviewNeeded)
        );
        assert_eq!(
            Recommendation::from_label("REJECT"),
            Some(Recommendation::Reject)
        );
        assert_eq!(Recommendation::from_label("MAYBE"), None);
    }

    #[test]
    fn test_recommendation_display_round_trip() {
        for rec in [
            Recommendation::Approve,
            Recommendation::ReviewNeeded,
            Recommendation::Reject,
        ] {
            assert_eq!(Recommendation::from_label(&rec.to_string()), Some(rec));
        }
    }

    #[test]
    fn test_report_defaults() {
        let report = Report::default();
        assert_eq!(report.score, 5);
        assert_eq!(report.recommendation, Recommendation::ReviewNeeded);
        assert!(report.flagged_items.is_empty());
    }

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&Recommendation::ReviewNeeded).unwrap();
        assert_eq!(json, "\"REVIEW_NEEDED\"");
    }
}
