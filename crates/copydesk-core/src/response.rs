//! Model-response splitting and the end-to-end pipeline.
//!
//! The generator returns one text blob holding the rewritten article and,
//! after a literal `---ANALYSIS---` separator, the validation report. The
//! split is deterministic text processing, so it lives here rather than in
//! the transport glue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markdown::HtmlRenderer;
use crate::report::{extract_report, Report};

/// Separator between the article part and the analysis part.
pub const ANALYSIS_SEPARATOR: &str = "---ANALYSIS---";

/// A model response split into its two independent parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelResponse {
    /// Article text: everything before the first separator, trimmed.
    pub article: String,

    /// Report text after the separator, trimmed; `None` when the model
    /// omitted the separator entirely.
    pub analysis: Option<String>,
}

impl ModelResponse {
    /// Split a full response at the first `---ANALYSIS---` occurrence.
    pub fn split(full: &str) -> Self {
        match full.split_once(ANALYSIS_SEPARATOR) {
            Some((article, analysis)) => Self {
                article: article.trim().to_string(),
                analysis: Some(analysis.trim().to_string()),
            },
            None => {
                debug!("response carries no analysis separator");
                Self {
                    article: full.trim().to_string(),
                    analysis: None,
                }
            }
        }
    }
}

/// Everything the presentation layer needs from one model response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedResponse {
    /// The article part rendered to HTML.
    pub article_html: String,

    /// Typed report fields; all defaults when the analysis part is missing.
    pub report: Report,

    /// When this response was processed.
    pub processed_at: DateTime<Utc>,
}

impl ProcessedResponse {
    /// Serialize for the transport layer's response body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Split, render, and extract in one pass.
pub fn process(renderer: &HtmlRenderer, full: &str) -> ProcessedResponse {
    let response = ModelResponse::split(full);
    let report = match &response.analysis {
        Some(analysis) => extract_report(analysis),
        None => Report::default(),
    };

    ProcessedResponse {
        article_html: renderer.render(&response.article),
        report,
        processed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::Theme;
    use crate::report::Recommendation;

    #[test]
    fn test_split_at_separator() {
        let response = ModelResponse::split("article text\n---ANALYSIS---\nScore: 7/10");
        assert_eq!(response.article, "article text");
        assert_eq!(response.analysis.as_deref(), Some("Score: 7/10"));
    }

    #[test]
    fn test_split_without_separator() {
        let response = ModelResponse::split("only an article here");
        assert_eq!(response.article, "only an article here");
        assert!(response.analysis.is_none());
    }

    #[test]
    fn test_split_at_first_separator_only() {
        let response =
            ModelResponse::split("a\n---ANALYSIS---\nb\n---ANALYSIS---\nc");
        assert_eq!(response.article, "a");
        assert_eq!(response.analysis.as_deref(), Some("b\n---ANALYSIS---\nc"));
    }

    #[test]
    fn test_process_full_response() {
        let renderer = HtmlRenderer::new(Theme::plain());
        let processed = process(
            &renderer,
            "# Title\n\nBody.\n\n---ANALYSIS---\n\nScore: 9/10\nRECOMMENDATION: APPROVE",
        );
        assert_eq!(processed.article_html, "<h1>Title</h1>\n<p>Body.</p>");
        assert_eq!(processed.report.score, 9);
        assert_eq!(processed.report.recommendation, Recommendation::Approve);
    }

    #[test]
    fn test_processed_response_serializes() {
        let renderer = HtmlRenderer::new(Theme::plain());
        let processed = process(&renderer, "text\n---ANALYSIS---\nScore: 2/10");
        let json = processed.to_json().unwrap();
        assert!(json.contains("\"article_html\""));
        assert!(json.contains("\"score\": 2"));
        assert!(json.contains("\"REVIEW_NEEDED\""));
    }

    #[test]
    fn test_process_without_analysis_uses_default_report() {
        let renderer = HtmlRenderer::new(Theme::plain());
        let processed = process(&renderer, "plain article");
        assert_eq!(processed.article_html, "<p>plain article</p>");
        assert_eq!(processed.report, Report::default());
    }
}
