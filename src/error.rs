//! Error types for the feedback marker engine.
//!
//! Detection, validation and rewriting never fail: they degrade to empty
//! or unchanged results. Building a link from an identifier is the one
//! operation that reports a hard error, alongside the configuration layer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fallible engine operations.
pub type LinkerResult<T> = Result<T, LinkerError>;

/// Error type for all fallible operations in the crate.
#[derive(Debug, Error)]
pub enum LinkerError {
    /// Identifier is not a non-empty run of decimal digits.
    #[error("Invalid identifier '{value}': must contain only digits")]
    InvalidIdentifier { value: String },

    /// Invalid parameter passed to a constructor or builder
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// Error occurred while reading a file
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file could not be parsed or holds bad values
    #[error("Config error in '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl LinkerError {
    /// Builds an [`LinkerError::InvalidIdentifier`] carrying the rejected value.
    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
        }
    }

    /// Returns the offending value when this is an identifier error.
    pub fn rejected_identifier(&self) -> Option<&str> {
        match self {
            Self::InvalidIdentifier { value } => Some(value),
            _ => None,
        }
    }
}
