//! Question normalization.

/// Turns raw input into the question shown to the user and sent to the oracle.
///
/// Returns `None` when the input is empty after trimming. Otherwise the trimmed
/// text is returned with a `?` appended unless it already ends with one.
pub fn normalize_question(raw: &str) -> Option<String> {
    let text = raw.trim();

    if text.is_empty() {
        return None;
    }

    if text.ends_with('?') {
        Some(text.to_string())
    } else {
        Some(format!("{text}?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(normalize_question(""), None);
        assert_eq!(normalize_question("   "), None);
        assert_eq!(normalize_question("\t\n"), None);
    }

    #[test]
    fn test_appends_question_mark() {
        assert_eq!(
            normalize_question("Will it rain"),
            Some("Will it rain?".to_string())
        );
    }

    #[test]
    fn test_keeps_existing_question_mark() {
        assert_eq!(
            normalize_question("Will it rain?"),
            Some("Will it rain?".to_string())
        );
    }

    #[test]
    fn test_trims_before_checking_terminator() {
        assert_eq!(
            normalize_question("  Who am I?  "),
            Some("Who am I?".to_string())
        );
        assert_eq!(
            normalize_question("  Who am I  "),
            Some("Who am I?".to_string())
        );
    }

    #[test]
    fn test_other_punctuation_still_gets_question_mark() {
        assert_eq!(normalize_question("Tell me."), Some("Tell me.?".to_string()));
        assert_eq!(normalize_question("Really!"), Some("Really!?".to_string()));
    }

    #[test]
    fn test_unicode_input() {
        assert_eq!(
            normalize_question("明日は晴れますか"),
            Some("明日は晴れますか?".to_string())
        );
    }
}
