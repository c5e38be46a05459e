//! Property-based tests for the validator chain

use fieldcheck::sanitize::{collapse_whitespace, escape_html, trim_whitespace, TRIMMED_CHARS};
use fieldcheck::{Kind, Validator};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = String> {
    "[ a-z0-9/\t\n<>&]{0,20}"
}

proptest! {
    #[test]
    fn prop_text_round_trips(s in any::<String>()) {
        prop_assert_eq!(Validator::text(s.clone()).to_text(), s);
    }

    #[test]
    fn prop_min_length_boundary(s in any::<String>()) {
        let len = s.len();

        let at = Validator::text(s.clone()).min_length(len).unwrap();
        prop_assert_eq!(at.errors(), "");

        let above = Validator::text(s).min_length(len + 1).unwrap();
        prop_assert_eq!(above.errors(), format!("min length: {}", len + 1));
    }

    #[test]
    fn prop_max_length_counts_long_entries(items in prop::collection::vec(field(), 0..10), max in 1usize..10) {
        let expected = items.iter().filter(|s| s.len() > max).count();
        let v = Validator::list(items).max_length(max).unwrap();
        prop_assert_eq!(v.error_list().len(), expected);
    }

    #[test]
    fn prop_trim_list_keeps_nonblank_in_order(items in prop::collection::vec(field(), 0..10)) {
        let expected: Vec<String> = items
            .iter()
            .map(|s| trim_whitespace(s))
            .filter(|s| !s.is_empty())
            .collect();

        let v = Validator::list(items).trim();
        prop_assert_eq!(v.kind(), Kind::TextList);
        prop_assert!(v.is_valid());
        prop_assert_eq!(v.unwrap_list().unwrap(), expected);
    }

    #[test]
    fn prop_trim_is_idempotent(s in field()) {
        let once = trim_whitespace(&s);
        prop_assert_eq!(trim_whitespace(&once), once.clone());
        prop_assert!(!once.starts_with(&TRIMMED_CHARS[..]));
        prop_assert!(!once.ends_with(&TRIMMED_CHARS[..]));
    }

    #[test]
    fn prop_spacify_leaves_no_runs(s in field()) {
        let out = collapse_whitespace(&s);
        let bytes = out.as_bytes();
        prop_assert!(bytes
            .windows(2)
            .all(|w| !(w[0].is_ascii_whitespace() && w[1].is_ascii_whitespace())));
    }

    #[test]
    fn prop_htmlify_removes_markup(s in field()) {
        let out = escape_html(&s);
        prop_assert!(!out.contains('<'));
        prop_assert!(!out.contains('>'));
        prop_assert!(!out.contains('"'));
    }

    #[test]
    fn prop_errors_only_grow(s in field()) {
        let v = Validator::text(s).not_empty();
        let before = v.error_list().len();
        let v = v.min_length(5).unwrap().trim().htmlify();
        prop_assert!(v.error_list().len() >= before);
    }
}
