//! HTML rendering.
//!
//! The renderer walks a parsed [`Document`] in source order and emits one
//! fragment per block, joined by single newlines. Rendering is referentially
//! transparent: same input, same output, no side effects.

use serde::{Deserialize, Serialize};

use super::block::{classify, Block};
use super::inline::{is_blank, InlineSpan};
use super::segment::split_segments;
use super::theme::Theme;

/// A parsed document: an ordered sequence of classified blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Segment and classify raw text. Never fails; empty input yields an
    /// empty block list.
    pub fn parse(text: &str) -> Self {
        Self {
            blocks: split_segments(text).into_iter().map(classify).collect(),
        }
    }
}

/// Renders documents to styled HTML using a fixed [`Theme`].
pub struct HtmlRenderer {
    theme: Theme,
}

impl HtmlRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Parse and render raw text in one step.
    pub fn render(&self, text: &str) -> String {
        self.render_document(&Document::parse(text))
    }

    /// Render a parsed document to a single markup string.
    ///
    /// Blocks that reduce to an empty paragraph are dropped so the output
    /// never carries spurious blank paragraphs.
    pub fn render_document(&self, document: &Document) -> String {
        document
            .blocks
            .iter()
            .filter_map(|block| self.render_block(block))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_block(&self, block: &Block) -> Option<String> {
        match block {
            Block::Heading { level, spans } => {
                let level = (*level).clamp(1, 3);
                Some(format!(
                    "<h{level}{}>{}</h{level}>",
                    style_attr(self.theme.heading_style(level)),
                    render_spans(spans),
                ))
            }
            Block::OrderedList { items } => Some(format!(
                "<ol{}>{}</ol>",
                style_attr(&self.theme.ordered_list),
                self.render_items(items),
            )),
            Block::UnorderedList { items } => Some(format!(
                "<ul{}>{}</ul>",
                style_attr(&self.theme.unordered_list),
                self.render_items(items),
            )),
            Block::Paragraph { spans } => {
                if is_blank(spans) {
                    return None;
                }
                Some(format!(
                    "<p{}>{}</p>",
                    style_attr(&self.theme.paragraph),
                    render_spans(spans),
                ))
            }
        }
    }

    fn render_items(&self, items: &[Vec<InlineSpan>]) -> String {
        items
            .iter()
            .map(|spans| {
                format!(
                    "<li{}>{}</li>",
                    style_attr(&self.theme.list_item),
                    render_spans(spans)
                )
            })
            .collect()
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(Theme::default_theme())
    }
}

fn render_spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(text) => text.clone(),
            InlineSpan::Strong(text) => format!("<strong>{text}</strong>"),
            InlineSpan::Emphasis(text) => format!("<em>{text}</em>"),
            InlineSpan::LineBreak => "<br>".to_string(),
        })
        .collect()
}

fn style_attr(style: &str) -> String {
    if style.is_empty() {
        String::new()
    } else {
        format!(" style=\"{style}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plain() -> HtmlRenderer {
        HtmlRenderer::new(Theme::plain())
    }

    #[test]
    fn test_marker_free_input_is_one_paragraph() {
        let html = plain().render("just a line\nand another");
        assert_eq!(html, "<p>just a line<br>and another</p>");
    }

    #[test]
    fn test_heading_renders_at_its_own_level() {
        let html = plain().render("### Sub");
        assert_eq!(html, "<h3>Sub</h3>");
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn test_bold_then_italic() {
        let html = plain().render("**a** *b*");
        assert_eq!(html, "<p><strong>a</strong> <em>b</em></p>");
    }

    #[test]
    fn test_ordered_list_with_continuation() {
        let html = plain().render("1. Open app\nverify enabled\n2. Restart");
        assert_eq!(
            html,
            "<ol><li>Open app<br>verify enabled</li><li>Restart</li></ol>"
        );
    }

    #[test]
    fn test_unordered_list_bare_line_kept() {
        let html = plain().render("- a\nb\n- c");
        assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
    }

    #[test]
    fn test_blocks_joined_by_newline_in_order() {
        let html = plain().render("# Title\n\nbody");
        assert_eq!(html, "<h1>Title</h1>\n<p>body</p>");
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(plain().render(""), "");
        assert_eq!(plain().render("  \n\n \t\n\n"), "");
    }

    #[test]
    fn test_blank_paragraph_block_suppressed() {
        let document = Document {
            blocks: vec![
                Block::Paragraph {
                    spans: vec![InlineSpan::LineBreak, InlineSpan::LineBreak],
                },
                Block::Paragraph {
                    spans: vec![InlineSpan::Text("kept".to_string())],
                },
            ],
        };
        assert_eq!(plain().render_document(&document), "<p>kept</p>");
    }

    #[test]
    fn test_default_theme_styles_applied() {
        let html = HtmlRenderer::default().render("# Title");
        assert!(html.starts_with("<h1 style=\""));
    }

    #[test]
    fn test_rerender_of_output_adds_no_headings() {
        let renderer = plain();
        let first = renderer.render("# Title\n\nbody text");
        let second = renderer.render(&first);
        // The rendered `<h1>` line no longer starts with a hash, so a second
        // pass must not mint any new heading fragments.
        assert_eq!(
            first.matches("<h1").count(),
            second.matches("<h1").count()
        );
    }

    proptest! {
        #[test]
        fn prop_render_never_panics(input in ".*") {
            let _ = HtmlRenderer::default().render(&input);
        }

        #[test]
        fn prop_render_is_deterministic(input in ".*") {
            let renderer = HtmlRenderer::default();
            prop_assert_eq!(renderer.render(&input), renderer.render(&input));
        }

        #[test]
        fn prop_rerender_never_panics(input in ".*") {
            let renderer = HtmlRenderer::default();
            let once = renderer.render(&input);
            let _ = renderer.render(&once);
        }
    }
}
