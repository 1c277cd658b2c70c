//! Marker rewriting.
//!
//! The service walks the shared marker scan once, left to right, and splices
//! in whatever its [`RewriteStrategy`] produces for each match. A replaced
//! span is never revisited within the same call.

pub mod annotate;
pub mod linkify;
pub mod strategy;

pub use annotate::AnnotateStrategy;
pub use linkify::LinkifyStrategy;
pub use strategy::{RewriteMode, RewriteResult, RewriteStrategy};

use crate::domain::{self, scan_markers};
use crate::link::LinkBuilder;
use tracing::debug;

/// Rewrite service coordinating strategy execution.
pub struct RewriteService {
    strategy: Box<dyn RewriteStrategy>,
}

impl RewriteService {
    /// Creates a new rewrite service with the specified strategy.
    pub fn new(strategy: Box<dyn RewriteStrategy>) -> Self {
        Self { strategy }
    }

    /// Creates a service that annotates markers in place.
    pub fn annotating() -> Self {
        Self::new(Box::new(AnnotateStrategy::new()))
    }

    /// Creates a service that turns markers into links.
    pub fn linkifying(links: LinkBuilder) -> Self {
        Self::new(Box::new(LinkifyStrategy::new(links)))
    }

    /// Creates the service for `mode`; `links` is only used when linkifying.
    pub fn for_mode(mode: RewriteMode, links: LinkBuilder) -> Self {
        match mode {
            RewriteMode::Annotate => Self::annotating(),
            RewriteMode::Linkify => Self::linkifying(links),
        }
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Rewrites every marker in `text`.
    ///
    /// When nothing is rewritten the returned text is byte-identical to the
    /// input.
    pub fn rewrite(&self, text: &str) -> RewriteResult {
        if text.is_empty() {
            return RewriteResult::unchanged(text);
        }

        let mut rewritten = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut count = 0;

        for m in scan_markers(text) {
            rewritten.push_str(&text[cursor..m.start]);
            rewritten.push_str(&self.strategy.replacement(&m));
            cursor = m.end;
            count += 1;
        }

        if count == 0 {
            return RewriteResult::unchanged(text);
        }
        rewritten.push_str(&text[cursor..]);

        debug!(strategy = self.strategy.name(), count, "rewrote feedback markers");
        RewriteResult {
            text: rewritten,
            count,
        }
    }

    /// Reports whether [`RewriteService::rewrite`] would change `text`.
    pub fn has_replaceable(&self, text: &str) -> bool {
        domain::has_replaceable(text)
    }
}

impl Default for RewriteService {
    fn default() -> Self {
        Self::annotating()
    }
}

/// Annotates every marker in `text`.
///
/// ```
/// use feedback_linker::rewrite;
///
/// let result = rewrite("See feedback:123 and feedback:456");
/// assert_eq!(result.text, "See feedback: mevlana: 123 and feedback: mevlana: 456");
/// assert_eq!(result.count, 2);
/// assert_eq!(rewrite(&result.text).count, 0);
/// ```
pub fn rewrite(text: &str) -> RewriteResult {
    RewriteService::annotating().rewrite(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_two_markers() {
        let result = rewrite("See feedback:123 and feedback:456");
        assert_eq!(
            result.text,
            "See feedback: mevlana: 123 and feedback: mevlana: 456"
        );
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let once = rewrite("FEEDBACK:  9 then feedback:10x");
        assert_eq!(once.count, 2);
        assert_eq!(once.text, "feedback: mevlana: 9 then feedback: mevlana: 10x");
        let twice = rewrite(&once.text);
        assert_eq!(twice.count, 0);
        assert_eq!(twice.text, once.text);
    }

    #[test]
    fn test_no_markers_leaves_text_alone() {
        let text = "nothing to see, feedback: here";
        let result = rewrite(text);
        assert_eq!(result, RewriteResult::unchanged(text));
        assert_eq!(rewrite(""), RewriteResult::unchanged(""));
    }

    #[test]
    fn test_linkify() {
        let service = RewriteService::linkifying(LinkBuilder::new());
        let result = service.rewrite("fixed in feedback:42.");
        assert_eq!(result.text, "fixed in https://github.com/42.");
        assert_eq!(result.count, 1);
        assert_eq!(service.rewrite(&result.text).count, 0);
        assert_eq!(service.strategy_name(), "linkify");
    }

    #[test]
    fn test_for_mode() {
        let service = RewriteService::for_mode(RewriteMode::Annotate, LinkBuilder::new());
        assert_eq!(service.strategy_name(), "annotate");
        assert!(service.has_replaceable("feedback:1"));
        assert!(!service.has_replaceable("feedback: mevlana: 1"));
    }
}
