//! External reference links for feedback identifiers.
//!
//! Building a link is an explicit user action, so an invalid identifier is
//! reported as [`LinkerError::InvalidIdentifier`] instead of being skipped.

use crate::domain::{is_valid_id, FeedbackPatterns, MARKER};
use crate::error::{LinkerError, LinkerResult};
use tracing::debug;

/// Base every link starts with unless configured otherwise.
pub const DEFAULT_LINK_BASE: &str = "https://github.com/";

/// Builds links by appending a validated identifier to a fixed base.
///
/// Identifiers are digit-only, so no percent-encoding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    /// Creates a builder with [`DEFAULT_LINK_BASE`].
    pub fn new() -> Self {
        Self {
            base: DEFAULT_LINK_BASE.to_string(),
        }
    }

    /// Creates a builder with a custom base.
    ///
    /// The base is used verbatim; include a trailing separator if one is wanted.
    /// A base that could complete a marker, on its own or joined to the text
    /// in front of a replaced marker, is rejected: linkified text would then
    /// be detected again. That covers bases containing `feedback:`, bases
    /// starting with whitespace or a digit, and bases starting with the tail
    /// of the marker (such as `back:`).
    pub fn with_base(base: impl Into<String>) -> LinkerResult<Self> {
        let base = base.into();
        if base.trim().is_empty() {
            return Err(LinkerError::InvalidInput {
                parameter: "link_base".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if Self::completes_marker(&base) {
            return Err(LinkerError::InvalidInput {
                parameter: "link_base".to_string(),
                reason: format!(
                    "'{}' would form a '{}' marker in linkified text",
                    base, MARKER
                ),
            });
        }
        Ok(Self { base })
    }

    /// Checks `base` behind every prefix of the marker, followed by an id.
    fn completes_marker(base: &str) -> bool {
        (0..=MARKER.len()).any(|split| {
            let joined = format!("{}{}0", &MARKER[..split], base);
            FeedbackPatterns::raw().is_match(&joined)
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns `base + id`, or an error carrying `id` when it is not valid.
    pub fn build(&self, id: &str) -> LinkerResult<String> {
        if !is_valid_id(id) {
            debug!(id, "rejected identifier for link");
            return Err(LinkerError::invalid_identifier(id));
        }
        Ok(format!("{}{}", self.base, id))
    }
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a link with the default base.
///
/// ```
/// use feedback_linker::build_link;
///
/// assert_eq!(build_link("123").unwrap(), "https://github.com/123");
/// assert!(build_link("abc").is_err());
/// ```
pub fn build_link(id: &str) -> LinkerResult<String> {
    LinkBuilder::new().build(id)
}
