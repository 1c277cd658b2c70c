//! Annotating rewrite: `feedback:123` becomes `feedback: mevlana: 123`.

use super::strategy::RewriteStrategy;
use crate::domain::{FeedbackMatch, ANNOTATION_TAG};
use std::borrow::Cow;

/// Inserts the annotation tag between the marker and the identifier.
///
/// The identifier is copied verbatim, leading zeros included. The tag sits
/// between the colon and the digits, which is exactly what keeps annotated
/// text from matching the raw marker rule again.
#[derive(Debug, Clone, Default)]
pub struct AnnotateStrategy;

impl AnnotateStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl RewriteStrategy for AnnotateStrategy {
    fn replacement<'a>(&self, m: &'a FeedbackMatch) -> Cow<'a, str> {
        Cow::Owned(format!("feedback: {}: {}", ANNOTATION_TAG, m.numeric_id))
    }

    fn name(&self) -> &str {
        "annotate"
    }
}
