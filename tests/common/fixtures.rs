//! Text fixtures and builders.
//!
//! Provides a builder for card-like text with markers at known positions,
//! following the Builder pattern for clean test setup.

/// Builder for free-form text containing feedback markers.
///
/// # Example
///
/// ```ignore
/// let text = CardTextBuilder::new()
///     .with_prose("Reported by QA")
///     .with_marker("123")
///     .with_annotated("456")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CardTextBuilder {
    parts: Vec<String>,
    ids: Vec<String>,
    annotated: usize,
}

impl CardTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds plain text without any marker.
    pub fn with_prose(mut self, prose: &str) -> Self {
        self.parts.push(prose.to_string());
        self
    }

    /// Adds a raw `feedback:<id>` marker.
    pub fn with_marker(mut self, id: &str) -> Self {
        self.parts.push(format!("feedback:{}", id));
        self.ids.push(id.to_string());
        self
    }

    /// Adds a raw marker with custom casing and spacing.
    pub fn with_marker_styled(mut self, marker: &str, spacing: &str, id: &str) -> Self {
        self.parts.push(format!("{}{}{}", marker, spacing, id));
        self.ids.push(id.to_string());
        self
    }

    /// Adds an already-annotated marker.
    pub fn with_annotated(mut self, id: &str) -> Self {
        self.parts.push(format!("feedback: mevlana: {}", id));
        self.annotated += 1;
        self
    }

    /// Identifiers of the raw markers, in insertion order.
    pub fn expected_ids(&self) -> Vec<&str> {
        self.ids.iter().map(String::as_str).collect()
    }

    pub fn expected_annotated(&self) -> usize {
        self.annotated
    }

    /// Joins all parts with single spaces.
    pub fn build(&self) -> String {
        self.parts.join(" ")
    }
}

/// A realistic card description with mixed content.
pub fn sample_card() -> &'static str {
    "Login button unresponsive on Safari.\n\
     Reported in feedback:1042, duplicate of Feedback: 977.\n\
     Already triaged: feedback: mevlana: 500\n\
     Not a marker: feedback:n/a, feedback:\n\
     Follow-up FEEDBACK:\t0031 (leading zeros kept)\n"
}

/// Identifiers in [`sample_card`] that still need rewriting.
pub fn sample_card_ids() -> Vec<&'static str> {
    vec!["1042", "977", "0031"]
}
