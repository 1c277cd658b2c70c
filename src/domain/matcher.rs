//! Marker detection.
//!
//! Finds every `feedback:<digits>` occurrence in free-form text. Text that
//! contains no markers is the normal case, so nothing here returns an error.

use super::{scan_markers, FeedbackPatterns};
use tracing::debug;

/// One detected marker and its source span.
///
/// `start` and `end` are half-open byte offsets, so
/// `&source[m.start..m.end] == m.original_text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackMatch {
    /// The matched span, marker included (`feedback:  123`)
    pub original_text: String,

    /// Captured digit run, verbatim (leading zeros kept)
    pub numeric_id: String,

    /// Byte offset of the first character of the match
    pub start: usize,

    /// Byte offset one past the last character of the match
    pub end: usize,
}

/// Returns every marker in `text`, left to right, duplicates preserved.
///
/// Empty input yields an empty vector.
pub fn detect(text: &str) -> Vec<FeedbackMatch> {
    if text.is_empty() {
        return Vec::new();
    }

    let matches: Vec<FeedbackMatch> = scan_markers(text).collect();
    debug!(count = matches.len(), "detected feedback markers");
    matches
}

/// Returns just the identifiers of [`detect`], in order.
pub fn detect_ids(text: &str) -> Vec<String> {
    detect(text).into_iter().map(|m| m.numeric_id).collect()
}

/// Reports whether a rewrite of `text` would change anything.
///
/// Annotated markers can never match the raw rule, so this is simply
/// "at least one raw marker remains".
pub fn has_replaceable(text: &str) -> bool {
    !text.is_empty() && FeedbackPatterns::raw().is_match(text)
}

/// Counts markers that are already in annotated form.
pub fn count_annotated(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    FeedbackPatterns::annotated().find_iter(text).count()
}
