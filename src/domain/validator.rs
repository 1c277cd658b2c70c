//! Identifier validation.

/// Returns true iff `id` is present, non-empty and all ASCII digits.
///
/// Identifiers are opaque strings and are never parsed as numbers, so there
/// is no length limit. Pass `None` for an absent value.
///
/// ```
/// use feedback_linker::is_valid_id;
///
/// assert!(is_valid_id("0042"));
/// assert!(!is_valid_id("12.5"));
/// assert!(!is_valid_id(None));
/// ```
pub fn is_valid_id<'a>(id: impl Into<Option<&'a str>>) -> bool {
    match id.into() {
        Some(id) => !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digit_runs() {
        assert!(is_valid_id("123"));
        assert!(is_valid_id("0"));
        assert!(is_valid_id("999999"));
        assert!(is_valid_id("9".repeat(500).as_str()));
    }

    #[test]
    fn test_rejects_everything_else() {
        assert!(!is_valid_id("abc"));
        assert!(!is_valid_id("123abc"));
        assert!(!is_valid_id("12.34"));
        assert!(!is_valid_id(" 12"));
        assert!(!is_valid_id("-1"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id(None));
        assert!(!is_valid_id("\u{0661}"));
    }
}
