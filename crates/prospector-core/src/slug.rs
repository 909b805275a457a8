//! URL-safe identifiers derived from business names.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
// ASCII word characters only: accented letters are dropped, not transliterated.
static NON_SLUG_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid regex"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Generate a URL-safe slug from a business name.
///
/// Lower-cases, turns whitespace runs into `-`, drops everything that is not
/// an ASCII word character or `-`, collapses repeated hyphens, and trims
/// hyphens from both ends. Empty input yields an empty slug.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lower, "-");
    let stripped = NON_SLUG_CHAR.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_business_name() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<String>(),
            "[ \t\n\r\u{a0}\u{feff}a-zA-Z0-9_áéñÇİ\u{212a}☕\"',.&!¡?()\\[\\]-]{0,40}",
        ]
    }

    proptest! {
        #[test]
        fn slug_uses_only_lowercase_ascii_digits_underscore_and_hyphen(name in arb_business_name()) {
            let slug = slugify(&name);
            prop_assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'),
                "unexpected character in {:?}", slug
            );
        }

        #[test]
        fn slug_has_no_edge_or_repeated_hyphens(name in arb_business_name()) {
            let slug = slugify(&name);
            prop_assert!(!slug.starts_with('-'), "leading hyphen in {:?}", slug);
            prop_assert!(!slug.ends_with('-'), "trailing hyphen in {:?}", slug);
            prop_assert!(!slug.contains("--"), "double hyphen in {:?}", slug);
        }

        #[test]
        fn slug_is_a_fixed_point(name in arb_business_name()) {
            let slug = slugify(&name);
            prop_assert_eq!(slugify(&slug), slug);
        }
    }
}
