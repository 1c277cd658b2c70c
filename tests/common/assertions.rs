//! Custom assertions for marker detection and rewriting.

use feedback_linker::{detect, rewrite, FeedbackMatch};

/// Asserts that every match's span slices back to its original text.
///
/// # Panics
/// Panics if a span is out of bounds, not on a char boundary, or does not
/// reproduce `original_text`.
pub fn assert_spans_consistent(source: &str, matches: &[FeedbackMatch]) {
    for m in matches {
        let span = source.get(m.start..m.end).unwrap_or_else(|| {
            panic!(
                "span {}..{} is not a valid slice of {:?}",
                m.start, m.end, source
            )
        });
        assert_eq!(span, m.original_text, "span text mismatch in {:?}", source);
        assert!(
            m.original_text.ends_with(m.numeric_id.as_str()),
            "identifier {:?} should end the match {:?}",
            m.numeric_id,
            m.original_text
        );
    }
    for pair in matches.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "matches should be ordered and non-overlapping: {:?}",
            pair
        );
    }
}

/// Asserts that a second annotate pass over `text` changes nothing.
///
/// # Panics
/// Panics if the second pass rewrites anything.
pub fn assert_idempotent(text: &str) {
    let once = rewrite(text);
    let twice = rewrite(&once.text);
    assert_eq!(
        twice.count, 0,
        "second rewrite should be a no-op for {:?} (first pass gave {:?})",
        text, once.text
    );
    assert_eq!(twice.text, once.text);
}

/// Asserts that the identifiers detected in `text` are exactly `expected`.
pub fn assert_ids(text: &str, expected: &[&str]) {
    let ids: Vec<String> = detect(text).into_iter().map(|m| m.numeric_id).collect();
    assert_eq!(ids, expected, "identifiers detected in {:?}", text);
}
