//! Inline span scanning.
//!
//! Emphasis markers are resolved in a single left-to-right pass that produces
//! a span list per block, instead of whole-string substitution. Double
//! markers (`**`/`__`) are tried before single markers at every scan
//! position, so a bold span can never be misread as two italic spans.
//!
//! Spans never cross a line boundary; a marker whose closing pair sits on a
//! later line is kept as literal text.

use serde::{Deserialize, Serialize};

/// One inline run inside a block's text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum InlineSpan {
    /// Plain text, emitted verbatim.
    Text(String),
    /// Bold span: `**x**` or `__x__`.
    Strong(String),
    /// Italic span: `*x*` or `_x_`.
    Emphasis(String),
    /// A literal newline inside the block, rendered as a soft break.
    LineBreak,
}

/// Scan block text into inline spans.
///
/// Unterminated or empty markers fall through as literal text; the scanner
/// never fails.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        // Double markers first: `**`/`__` must win over `*`/`_`.
        if let Some(marker) = ["**", "__"].into_iter().find(|m| rest.starts_with(m)) {
            if let Some(body) = delimited_body(rest, marker) {
                flush(&mut plain, &mut spans);
                spans.push(InlineSpan::Strong(body.to_string()));
                rest = &rest[marker.len() * 2 + body.len()..];
                continue;
            }
        }
        if let Some(marker) = ["*", "_"].into_iter().find(|m| rest.starts_with(m)) {
            if let Some(body) = delimited_body(rest, marker) {
                flush(&mut plain, &mut spans);
                spans.push(InlineSpan::Emphasis(body.to_string()));
                rest = &rest[marker.len() * 2 + body.len()..];
                continue;
            }
        }
        if ch == '\n' {
            flush(&mut plain, &mut spans);
            spans.push(InlineSpan::LineBreak);
        } else {
            plain.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    flush(&mut plain, &mut spans);
    spans
}

/// True when a span list renders to nothing: no spans, or only soft breaks.
pub fn is_blank(spans: &[InlineSpan]) -> bool {
    spans.iter().all(|span| match span {
        InlineSpan::LineBreak => true,
        InlineSpan::Text(text) => text.trim().is_empty(),
        _ => false,
    })
}

/// Body between an opening marker at the start of `rest` and its closing
/// pair, if the pair exists on the same line and the body is non-empty.
fn delimited_body<'a>(rest: &'a str, marker: &str) -> Option<&'a str> {
    let after = &rest[marker.len()..];
    let end = after.find(marker)?;
    let body = &after[..end];
    if body.is_empty() || body.contains('\n') {
        return None;
    }
    Some(body)
}

fn flush(plain: &mut String, spans: &mut Vec<InlineSpan>) {
    if !plain.is_empty() {
        spans.push(InlineSpan::Text(std::mem::take(plain)));
    }
}
