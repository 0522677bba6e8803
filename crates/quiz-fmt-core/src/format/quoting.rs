/// Opening mark of the designated bracket pair.
pub const OPEN_BRACKET: &str = "「";
/// Closing mark of the designated bracket pair.
pub const CLOSE_BRACKET: &str = "」";

/// Add corner brackets around `text` where they are missing.
///
/// Evaluated in priority order:
/// - already wrapped on both sides → unchanged;
/// - starts with `「` but does not end with `」`: unchanged when a `」`
///   occurs anywhere (a complete bracketed clause followed by trailing
///   text, e.g. `「美術館」（おまけ）`), otherwise the closing mark is
///   appended;
/// - ends with `」` without the opening prefix → `「` is prepended;
/// - no marks at the relevant positions → wrapped on both sides.
///
/// Total and idempotent; the empty string becomes `「」`. A `」` that
/// appears mid-string keeps the input unchanged even without a matching
/// local `「` — downstream content relies on that.
pub fn add_quotes_if_needed(text: &str) -> String {
    let starts_open = text.starts_with(OPEN_BRACKET);
    let ends_close = text.ends_with(CLOSE_BRACKET);

    if starts_open && ends_close {
        return text.to_owned();
    }
    if starts_open {
        if text.contains(CLOSE_BRACKET) {
            return text.to_owned();
        }
        return format!("{text}{CLOSE_BRACKET}");
    }
    if ends_close {
        return format!("{OPEN_BRACKET}{text}");
    }
    format!("{OPEN_BRACKET}{text}{CLOSE_BRACKET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_table_matches_display_convention() {
        let cases = [
            ("test", "「test」"),
            ("「test」", "「test」"),
            ("「test", "「test」"),
            ("test」", "「test」"),
            ("「美術館」（おまけ）", "「美術館」（おまけ）"),
            ("「test」something", "「test」something"),
        ];
        for (input, expected) in cases {
            assert_eq!(add_quotes_if_needed(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn empty_string_becomes_empty_pair() {
        assert_eq!(add_quotes_if_needed(""), "「」");
    }

    #[test]
    fn whitespace_is_ordinary_text() {
        assert_eq!(add_quotes_if_needed("  "), "「  」");
    }

    #[test]
    fn lone_marks_are_completed() {
        assert_eq!(add_quotes_if_needed("「"), "「」");
        assert_eq!(add_quotes_if_needed("」"), "「」");
    }

    #[test]
    fn mid_string_close_without_local_open_is_preserved() {
        // Known quirk of the display convention: left as-is, not repaired.
        assert_eq!(add_quotes_if_needed("「a」b」"), "「a」b」");
    }
}
