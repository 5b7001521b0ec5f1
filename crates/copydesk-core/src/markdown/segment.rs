//! Block segmentation.
//!
//! A document is split into untyped segments at blank-line boundaries before
//! any classification happens. Segmentation never fails: any input produces
//! zero or more trimmed, non-empty segments.

/// Split raw text into blank-line-delimited segments.
///
/// Each segment is trimmed; segments that trim to nothing are dropped, so an
/// all-whitespace input yields an empty sequence and an input with no blank
/// line yields exactly one segment.
pub fn split_segments(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
