//! Extraction patterns and the extractor itself.
//!
//! Every field degrades to a documented default instead of an error: the
//! extractor is fed raw model output and model output drifts. Fallback
//! substitutions emit debug events so they stay observable.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{Recommendation, Report, DEFAULT_SCORE};

lazy_static! {
    /// Numeric token following a "Score" label, optional "/10" suffix. The
    /// word boundary keeps words like "underscored" from acting as a label.
    static ref SCORE_PATTERN: Regex =
        Regex::new(r"(?i)\bscore[^0-9\r\n]*(\d+)\s*(?:/\s*10)?").unwrap();

    /// Verdict following a "RECOMMENDATION" label, within a short gap that
    /// may include a line break, so heading-style reports
    /// (`## RECOMMENDATION` with the verdict on the next line) still parse.
    /// REVIEW NEEDED may be spelled with spaces or underscores.
    static ref RECOMMENDATION_PATTERN: Regex =
        Regex::new(r"(?i)recommendation[^a-zA-Z0-9]{0,20}(APPROVE|REVIEW[\s_]+NEEDED|REJECT)")
            .unwrap();

    /// Sentinel meaning the flagged-items section is intentionally empty.
    static ref NONE_DETECTED_PATTERN: Regex = Regex::new(r"(?i)none\s+detected").unwrap();

    /// The flagged-items section heading, decorated or not.
    static ref HALLUCINATIONS_HEADING_PATTERN: Regex =
        Regex::new(r"(?i)potential\s+hallucinations").unwrap();
}

/// Extract the typed fields from a raw validation report.
pub fn extract_report(raw_text: &str) -> Report {
    Report {
        score: extract_score(raw_text),
        recommendation: extract_recommendation(raw_text),
        flagged_items: extract_flagged_items(raw_text),
        raw_text: raw_text.to_string(),
    }
}

/// First integer following a "Score" label, or [`DEFAULT_SCORE`].
///
/// Out-of-range values are returned as parsed; clamping would hide a model
/// that scores outside 0-10, and the caller may want to see that.
fn extract_score(text: &str) -> u32 {
    let parsed = SCORE_PATTERN
        .captures(text)
        .and_then(|captures| captures[1].parse::<u32>().ok());

    match parsed {
        Some(score) => score,
        None => {
            debug!(default = DEFAULT_SCORE, "no score label found, using default");
            DEFAULT_SCORE
        }
    }
}

/// Verdict following a "RECOMMENDATION" label, or `REVIEW_NEEDED`.
fn extract_recommendation(text: &str) -> Recommendation {
    let parsed = RECOMMENDATION_PATTERN
        .captures(text)
        .and_then(|captures| Recommendation::from_label(&captures[1]));

    match parsed {
        Some(recommendation) => recommendation,
        None => {
            debug!("no recommendation label found, using REVIEW_NEEDED");
            Recommendation::default()
        }
    }
}

/// Bullet lines inside the "POTENTIAL HALLUCINATIONS" section.
///
/// The section spans from just after its heading line to the next line
/// starting with a heading marker. A "none detected" sentinel anywhere in
/// the span wins over any bullet lines also present.
fn extract_flagged_items(text: &str) -> Vec<String> {
    let section = match hallucinations_section(text) {
        Some(section) => section,
        None => return Vec::new(),
    };

    if NONE_DETECTED_PATTERN.is_match(&section) {
        debug!("flagged-items sentinel present, dropping bullet lines");
        return Vec::new();
    }

    section
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-') || line.starts_with('•'))
        .map(|line| {
            line.trim_start_matches(['-', '•'])
                .trim()
                .to_string()
        })
        .filter(|item| !item.is_empty())
        .collect()
}

/// Text between the hallucinations heading and the next heading-like line.
fn hallucinations_section(text: &str) -> Option<String> {
    let mut lines = text.lines();
    lines.find(|line| HALLUCINATIONS_HEADING_PATTERN.is_match(line))?;

    let section: Vec<&str> = lines
        .take_while(|line| !line.trim_start().starts_with('#'))
        .collect();

    Some(section.join("\n"))
}
