//! Block classification.
//!
//! Each blank-line-delimited segment is assigned exactly one block type by a
//! leading-token rule. Classification is best-effort: anything that matches
//! no marker is a paragraph, never an error.
//!
//! ## Classification precedence
//!
//! 1. Heading - first line starts with `###`, `##`, or `#` (longest prefix
//!    tested first; 4+ hashes demote to level 3)
//! 2. Ordered list - first non-blank line matches `<digits>.`
//! 3. Unordered list - first non-blank line starts with `-` or `•`
//! 4. Paragraph - everything else

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::inline::{parse_inline, InlineSpan};

lazy_static! {
    /// An ordered-list item line: digits followed by a dot at line start.
    static ref ORDERED_ITEM_PATTERN: Regex = Regex::new(r"^\d+\.\s*").unwrap();
}

/// One structurally classified unit of a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Block {
    /// Heading with level 1-3. Deeper source headings are demoted to 3.
    Heading { level: u8, spans: Vec<InlineSpan> },
    /// Numbered list; each item holds its own span list.
    OrderedList { items: Vec<Vec<InlineSpan>> },
    /// Bulleted list; each item holds its own span list.
    UnorderedList { items: Vec<Vec<InlineSpan>> },
    /// Default block type; internal newlines survive as soft breaks.
    Paragraph { spans: Vec<InlineSpan> },
}

/// Classify one trimmed, non-empty segment into a block.
pub fn classify(segment: &str) -> Block {
    let first_line = segment.lines().find(|line| !line.trim().is_empty());
    let first_line = match first_line {
        Some(line) => line.trim_start(),
        None => return Block::Paragraph { spans: vec![] },
    };

    if first_line.starts_with('#') {
        return heading(segment);
    }
    if ORDERED_ITEM_PATTERN.is_match(first_line) {
        return ordered_list(segment);
    }
    if first_line.starts_with('-') || first_line.starts_with('•') {
        return unordered_list(segment);
    }

    Block::Paragraph {
        spans: parse_inline(segment),
    }
}

/// Heading level from the hash run on the first line, capped at 3.
fn heading(segment: &str) -> Block {
    let trimmed = segment.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    let level = hashes.min(3) as u8;
    let text = trimmed[hashes..].trim_start();

    Block::Heading {
        level,
        spans: parse_inline(text),
    }
}

/// Group an ordered-list segment into logical items.
///
/// A new item starts at each `<digits>.` line; any other line is a
/// continuation of the current item, joined with a soft break rather than
/// merged into prose.
fn ordered_list(segment: &str) -> Block {
    let mut items: Vec<String> = Vec::new();

    for line in segment.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(found) = ORDERED_ITEM_PATTERN.find(line) {
            items.push(line[found.end()..].to_string());
        } else if let Some(current) = items.last_mut() {
            current.push('\n');
            current.push_str(line);
        } else {
            items.push(line.to_string());
        }
    }

    Block::OrderedList {
        items: items.iter().map(|item| parse_inline(item)).collect(),
    }
}

/// Group an unordered-list segment: every non-empty line is its own item.
///
/// Unlike ordered lists there is no continuation folding; a bare line
/// between bullets becomes an item of its own.
fn unordered_list(segment: &str) -> Block {
    let items: Vec<Vec<InlineSpan>> = segment
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let text = line
                .strip_prefix('-')
                .or_else(|| line.strip_prefix('•'))
                .unwrap_or(line)
                .trim_start();
            parse_inline(text)
        })
        .collect();

    Block::UnorderedList { items }
}
