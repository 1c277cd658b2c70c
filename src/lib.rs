//! Detection and rewriting of `feedback:<id>` markers in free-form text.
//!
//! A marker is the case-insensitive literal `feedback:`, optional
//! whitespace, then a run of decimal digits (the identifier). The crate can
//! find markers, validate identifiers, annotate markers in place, or turn
//! them into external links.
//!
//! # Architecture
//!
//! - [`domain`]: the shared marker rule, detection and identifier validation
//! - [`rewrite`]: rewrite strategies (annotate, linkify) and the service
//!   that applies them
//! - [`link`]: link construction from validated identifiers
//! - [`config`]: optional TOML configuration
//! - [`error`]: error handling
//!
//! Detection, validation and rewriting never fail; text without markers
//! simply yields empty or unchanged results. Only link construction returns
//! an error, for identifiers that are not digit-only.
//!
//! # Quick Start
//!
//! ```
//! use feedback_linker::{build_link, detect, rewrite};
//!
//! let text = "Check out feedback:12345 for details";
//!
//! let matches = detect(text);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].numeric_id, "12345");
//! assert_eq!((matches[0].start, matches[0].end), (10, 24));
//!
//! let result = rewrite(text);
//! assert_eq!(result.text, "Check out feedback: mevlana: 12345 for details");
//!
//! assert_eq!(build_link("12345").unwrap(), "https://github.com/12345");
//! ```
//!
//! ## Linkify
//!
//! ```
//! use feedback_linker::{LinkBuilder, RewriteService};
//!
//! let service = RewriteService::linkifying(LinkBuilder::new());
//! let result = service.rewrite("see feedback: 7");
//! assert_eq!(result.text, "see https://github.com/7");
//! ```

// Public API
pub mod config;
pub mod domain;
pub mod error;
pub mod link;
pub mod rewrite;

// Re-exports for convenient access
pub use config::Config;
pub use domain::{
    count_annotated, detect, detect_ids, has_replaceable, is_valid_id, FeedbackMatch,
    FeedbackPatterns,
};
pub use error::{LinkerError, LinkerResult};
pub use link::{build_link, LinkBuilder, DEFAULT_LINK_BASE};
pub use rewrite::{
    rewrite, AnnotateStrategy, LinkifyStrategy, RewriteMode, RewriteResult, RewriteService,
    RewriteStrategy,
};
