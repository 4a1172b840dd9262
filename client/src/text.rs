use std::borrow::Cow;

/// Cut `text` to at most `max` characters, appending `...` when trimmed.
/// Counts characters rather than bytes so multi-byte input is never split
/// mid-sequence.
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        Some((idx, _)) => Cow::Owned(format!("{}...", &text[..idx])),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn short_text_passes_through_unchanged() {
        assert_eq!(truncate("short response", 200), "short response");
    }

    #[test]
    fn text_at_the_threshold_is_not_trimmed() {
        let text = "a".repeat(200);
        assert_eq!(truncate(&text, 200), text);
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let text = "a".repeat(250);
        let cut = truncate(&text, 200);
        assert_eq!(cut.len(), 203);
        assert!(cut.starts_with(&"a".repeat(200)));
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn multibyte_text_is_cut_on_character_boundaries() {
        let text = "é".repeat(10);
        assert_eq!(truncate(&text, 4).as_ref(), format!("{}...", "é".repeat(4)));
    }
}
