//! Domain rules for feedback markers.
//!
//! The marker rule is defined once here and consumed by detection and by
//! every rewrite strategy, so the boundary semantics cannot drift between
//! call sites.

pub mod matcher;
pub mod validator;

pub use matcher::{count_annotated, detect, detect_ids, has_replaceable, FeedbackMatch};
pub use validator::is_valid_id;

use once_cell::sync::Lazy;
use regex::Regex;

/// The literal marker token, compared ASCII case-insensitively.
pub const MARKER: &str = "feedback:";

/// Tag inserted between the marker and the identifier when annotating.
pub const ANNOTATION_TAG: &str = "mevlana";

/// Characters allowed between the marker and the identifier.
///
/// Unicode space separators, line terminators and U+FEFF. U+0085 (NEL) is
/// not included.
const GAP: &str = r"[\t\n\x0B\x0C\r\x20\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Compiled marker patterns.
///
/// A compiled [`Regex`] holds no scan cursor: every iteration below keeps
/// its position in a call-local iterator.
pub struct FeedbackPatterns;

impl FeedbackPatterns {
    /// `feedback:` then optional whitespace then a maximal ASCII digit run.
    ///
    /// Anything other than whitespace between the colon and the digits
    /// (such as the annotation tag) prevents a match.
    pub fn raw() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(&format!(r"(?i-u:feedback):{GAP}*([0-9]+)"))
                .expect("Valid feedback marker regex")
        });
        &PATTERN
    }

    /// Already-annotated form, `feedback: mevlana: <digits>` with loose spacing.
    pub fn annotated() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(&format!(r"(?i-u:feedback):{GAP}*(?i-u:mevlana):{GAP}*([0-9]+)"))
                .expect("Valid annotated marker regex")
        });
        &PATTERN
    }
}

/// Scans `text` left to right and yields every non-overlapping marker.
///
/// This is the single definition of the marker rule. Scanning resumes
/// right after the end of each match.
pub fn scan_markers(text: &str) -> impl Iterator<Item = FeedbackMatch> + '_ {
    FeedbackPatterns::raw()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let id = caps.get(1)?;
            Some(FeedbackMatch {
                original_text: whole.as_str().to_string(),
                numeric_id: id.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
            })
        })
}
