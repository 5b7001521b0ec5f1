//! Presentational style table.
//!
//! Styling is fixed per block type for the lifetime of a renderer, injected
//! once at construction. Rendering logic never hard-codes a style string, so
//! alternate themes swap in without touching the renderer.

use serde::{Deserialize, Serialize};

/// Style descriptors for every element the renderer can emit.
///
/// Each field is the body of a `style` attribute; an empty string means the
/// attribute is omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub heading: [String; 3],
    pub paragraph: String,
    pub ordered_list: String,
    pub unordered_list: String,
    pub list_item: String,
}

impl Theme {
    /// The stock presentational theme: one distinct style per heading level.
    pub fn default_theme() -> Self {
        Self {
            heading: [
                "font-size:1.6em;font-weight:700;margin:0.8em 0 0.4em".to_string(),
                "font-size:1.3em;font-weight:700;margin:0.7em 0 0.35em".to_string(),
                "font-size:1.1em;font-weight:600;margin:0.6em 0 0.3em".to_string(),
            ],
            paragraph: "margin:0.5em 0;line-height:1.5".to_string(),
            ordered_list: "margin:0.5em 0;padding-left:1.5em".to_string(),
            unordered_list: "margin:0.5em 0;padding-left:1.5em".to_string(),
            list_item: "margin:0.25em 0".to_string(),
        }
    }

    /// A bare theme with no style attributes, for hosts that style via CSS.
    pub fn plain() -> Self {
        Self {
            heading: [String::new(), String::new(), String::new()],
            paragraph: String::new(),
            ordered_list: String::new(),
            unordered_list: String::new(),
            list_item: String::new(),
        }
    }

    /// Style for a heading level in 1..=3.
    pub fn heading_style(&self, level: u8) -> &str {
        let index = (level.clamp(1, 3) - 1) as usize;
        &self.heading[index]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
