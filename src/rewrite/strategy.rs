//! Rewrite strategy trait and supporting types.
//!
//! A strategy decides what a single detected marker is replaced with; the
//! service in the parent module owns the scan and the splicing.

use crate::domain::FeedbackMatch;
use crate::error::LinkerError;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Outcome of rewriting one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteResult {
    /// Source text with every marker replaced
    pub text: String,

    /// Number of replacements made by this call
    pub count: usize,
}

impl RewriteResult {
    /// Creates a result that leaves `text` untouched.
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            count: 0,
        }
    }

    /// Returns true if any marker was rewritten.
    pub fn has_rewrites(&self) -> bool {
        self.count > 0
    }
}

/// Which replacement a rewrite applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteMode {
    /// `feedback: mevlana: <id>`
    #[default]
    Annotate,

    /// The external link for `<id>`
    Linkify,
}

impl RewriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annotate => "annotate",
            Self::Linkify => "linkify",
        }
    }
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RewriteMode {
    type Err = LinkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annotate" => Ok(Self::Annotate),
            "linkify" => Ok(Self::Linkify),
            _ => Err(LinkerError::InvalidInput {
                parameter: "mode".to_string(),
                reason: format!("unknown rewrite mode '{}' (expected annotate or linkify)", s),
            }),
        }
    }
}

/// Strategy for replacing a detected marker.
///
/// Replacements must never contain a raw marker, otherwise a second
/// rewrite pass would find new work and idempotence is lost.
pub trait RewriteStrategy: Send + Sync {
    /// Returns the text that replaces `m.original_text`.
    fn replacement<'a>(&self, m: &'a FeedbackMatch) -> Cow<'a, str>;

    /// Returns a human-readable name for this strategy.
    fn name(&self) -> &str;
}
