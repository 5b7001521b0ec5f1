//! # copydesk-core
//!
//! Deterministic article rendering and validation-report extraction.
//!
//! This crate is the non-AI half of a content pipeline that sits between a
//! text generator and a browser UI. It turns a constrained Markdown subset
//! into styled HTML blocks and parses free-form validation reports into
//! typed fields.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Infallible**: Malformed input degrades to documented defaults,
//!    never to an error
//! 3. **Stateless**: Every call works on one immutable input string; no
//!    cross-call state, no I/O
//! 4. **Closed output**: The renderer only ever emits headings (1-3),
//!    paragraphs, lists, and strong/emphasis spans
//!
//! Prompt construction, model invocation, and HTTP handling are collaborator
//! concerns; this crate only consumes their raw text.
//!
//! ## Example
//!
//! ```rust
//! use copydesk_core::{extract_report, render_article, Recommendation};
//!
//! let html = render_article("## Steps\n\n1. Open the app\n2. Restart");
//! assert!(html.starts_with("<h2"));
//!
//! let report = extract_report("Score: 7/10\nRECOMMENDATION: APPROVE");
//! assert_eq!(report.score, 7);
//! assert_eq!(report.recommendation, Recommendation::Approve);
//! ```

pub mod markdown;
pub mod report;
pub mod response;

// Re-export main types at crate root
pub use markdown::{Block, Document, HtmlRenderer, InlineSpan, Theme};
pub use report::{extract_report, Recommendation, Report};
pub use response::{process, ModelResponse, ProcessedResponse, ANALYSIS_SEPARATOR};

/// Render article text to HTML with the stock theme.
///
/// Convenience wrapper over [`HtmlRenderer`]; construct the renderer
/// yourself to supply a different [`Theme`].
pub fn render_article(text: &str) -> String {
    HtmlRenderer::default().render(text)
}

/// Split a full model response, render its article part with the stock
/// theme, and extract its report part.
pub fn process_response(full: &str) -> ProcessedResponse {
    process(&HtmlRenderer::default(), full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_article_entry_point() {
        let html = render_article("# Why Is My Speaker Not Charging?\n\nCheck the cable.");
        assert!(html.contains("<h1"));
        assert!(html.contains("<p"));
        assert!(html.contains("Check the cable."));
    }

    #[test]
    fn test_process_response_entry_point() {
        let processed = process_response(
            "# Fixed Article\n\n---ANALYSIS---\n\n\
             ## POTENTIAL HALLUCINATIONS\n- invented a port name\n\n\
             ## SCORE\nScore: 6/10\n\n\
             ## RECOMMENDATION\nRECOMMENDATION: REVIEW NEEDED",
        );
        assert!(processed.article_html.contains("<h1"));
        assert_eq!(processed.report.score, 6);
        assert_eq!(processed.report.recommendation, Recommendation::ReviewNeeded);
        assert_eq!(processed.report.flagged_items, vec!["invented a port name"]);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert_eq!(render_article(""), "");
    }
}
