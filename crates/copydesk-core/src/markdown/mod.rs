//! Markdown-subset to HTML rendering.
//!
//! The supported grammar is deliberately small: `#`/`##`/`###` headings,
//! `<n>.` ordered items, `-`/`•` bullets, `**`/`__` bold, `*`/`_` italic,
//! blank-line block separation. Everything else is prose. Parsing is a
//! best-effort interpreter that never fails; unrecognized shapes fall back
//! to paragraphs.
//!
//! Pipeline: [`segment::split_segments`] → [`block::classify`] (which scans
//! inline spans via [`inline::parse_inline`]) → [`render::HtmlRenderer`].

pub mod block;
pub mod inline;
pub mod render;
pub mod segment;
pub mod theme;

pub use block::Block;
pub use inline::InlineSpan;
pub use render::{Document, HtmlRenderer};
pub use theme::Theme;
