//! Linkifying rewrite: `feedback:123` becomes the external link for `123`.

use super::strategy::RewriteStrategy;
use crate::domain::FeedbackMatch;
use crate::link::LinkBuilder;
use std::borrow::Cow;
use tracing::warn;

/// Replaces each marker with a link built from its identifier.
#[derive(Debug, Clone, Default)]
pub struct LinkifyStrategy {
    links: LinkBuilder,
}

impl LinkifyStrategy {
    pub fn new(links: LinkBuilder) -> Self {
        Self { links }
    }
}

impl RewriteStrategy for LinkifyStrategy {
    fn replacement<'a>(&self, m: &'a FeedbackMatch) -> Cow<'a, str> {
        // Detected identifiers are digit-only, so this only falls back if
        // the match was built by hand.
        match self.links.build(&m.numeric_id) {
            Ok(link) => Cow::Owned(link),
            Err(err) => {
                warn!(error = %err, "leaving marker in place");
                Cow::Borrowed(&m.original_text)
            }
        }
    }

    fn name(&self) -> &str {
        "linkify"
    }
}
