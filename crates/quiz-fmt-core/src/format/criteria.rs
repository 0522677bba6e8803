use super::quoting::add_quotes_if_needed;
use crate::record::Criteria;

/// Separator placed between non-empty category sections.
pub const SECTION_SEPARATOR: &str = "／";
/// Suffix appended to the rejected-answer section.
pub const NG_SUFFIX: &str = "は誤答";
/// Suffix appended to the repeat-required section.
pub const REPEAT_SUFFIX: &str = "はもう一度";

/// Normalize every item in order, concatenate with no inner separator, and
/// append `suffix`. Empty input yields the empty string.
pub fn format_section(items: &[String], suffix: &str) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for item in items {
        out.push_str(&add_quotes_if_needed(item));
    }
    out.push_str(suffix);
    out
}

/// Compose the judgement string for one record. The category order and the
/// suffixes are a fixed display convention: accepted alternates first, then
/// rejected answers, then repeat-required answers, joined with `／`.
/// Unrecognized categories never contribute. Pure; recomputed on every call.
pub fn format_criteria(criteria: &Criteria) -> String {
    let sections: [(&[String], &str); 3] = [
        (criteria.ok.as_slice(), ""),
        (criteria.ng.as_slice(), NG_SUFFIX),
        (criteria.repeat.as_slice(), REPEAT_SUFFIX),
    ];

    let parts: Vec<String> = sections
        .into_iter()
        .map(|(items, suffix)| format_section(items, suffix))
        .filter(|section| !section.is_empty())
        .collect();
    parts.join(SECTION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_section_is_empty() {
        assert_eq!(format_section(&[], "は誤答"), "");
    }

    #[test]
    fn section_concatenates_without_inner_separator() {
        assert_eq!(format_section(&strings(&["a"]), ""), "「a」");
        assert_eq!(format_section(&strings(&["a", "b"]), "Y"), "「a」「b」Y");
        assert_eq!(
            format_section(&strings(&["ng1", "ng2"]), NG_SUFFIX),
            "「ng1」「ng2」は誤答"
        );
    }

    #[test]
    fn section_normalizes_already_quoted_items() {
        assert_eq!(format_section(&strings(&["「ok1」", "ok2"]), ""), "「ok1」「ok2」");
    }

    #[test]
    fn empty_criteria_formats_to_empty_string() {
        assert_eq!(format_criteria(&Criteria::default()), "");
    }

    #[test]
    fn single_categories_carry_their_suffix() {
        let ok = Criteria {
            ok: strings(&["ok1", "ok2"]),
            ..Criteria::default()
        };
        assert_eq!(format_criteria(&ok), "「ok1」「ok2」");

        let ng = Criteria {
            ng: strings(&["ng1"]),
            ..Criteria::default()
        };
        assert_eq!(format_criteria(&ng), "「ng1」は誤答");

        let repeat = Criteria {
            repeat: strings(&["rep1"]),
            ..Criteria::default()
        };
        assert_eq!(format_criteria(&repeat), "「rep1」はもう一度");
    }

    #[test]
    fn all_categories_join_in_fixed_order() {
        let criteria = Criteria {
            ok: strings(&["ok1", "ok2"]),
            ng: strings(&["ng1"]),
            repeat: strings(&["rep1"]),
            ..Criteria::default()
        };
        assert_eq!(
            format_criteria(&criteria),
            "「ok1」「ok2」／「ng1」は誤答／「rep1」はもう一度"
        );
    }

    #[test]
    fn absent_categories_are_skipped_without_separator() {
        let criteria = Criteria {
            ok: strings(&["ok1", "ok2"]),
            ng: strings(&["ng1"]),
            ..Criteria::default()
        };
        assert_eq!(format_criteria(&criteria), "「ok1」「ok2」／「ng1」は誤答");
    }

    #[test]
    fn unrecognized_categories_never_contribute() {
        let mut extra = BTreeMap::new();
        extra.insert("bonus".to_string(), strings(&["おまけ"]));
        let criteria = Criteria {
            ng: strings(&["ng1"]),
            extra,
            ..Criteria::default()
        };
        assert_eq!(format_criteria(&criteria), "「ng1」は誤答");
    }

    #[test]
    fn quoted_and_annotated_items_pass_through_unchanged() {
        let criteria = Criteria {
            ok: strings(&["「古典絵画館」", "古典美術館", "「アルテ・マイスター美術館」（おまけ）"]),
            ..Criteria::default()
        };
        assert_eq!(
            format_criteria(&criteria),
            "「古典絵画館」「古典美術館」「アルテ・マイスター美術館」（おまけ）"
        );
    }

    #[test]
    fn reading_correction_note_is_wrapped_whole() {
        let criteria = Criteria {
            repeat: strings(&["えんががわ（読みが違うのでもう一度）"]),
            ..Criteria::default()
        };
        assert_eq!(
            format_criteria(&criteria),
            "「えんががわ（読みが違うのでもう一度）」はもう一度"
        );
    }
}
