//! Tag grammar: the lexical definition of a valid geo tag.
//!
//! A tag is the fixed prefix followed by exactly six characters of the code
//! alphabet, case-insensitive on input and canonically lowercase.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix every geo tag carries.
pub const TAG_PREFIX: &str = "#geo";

/// Number of code characters in a tag body.
pub const TAG_CODE_LENGTH: usize = 6;

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#geo[23456789cfghjmpqrvwx]{6}$").unwrap());

/// Checks whether a string is a well-formed geo tag.
///
/// Total function: any input yields true or false, never an error.
pub fn is_valid_tag(s: &str) -> bool {
    TAG_RE.is_match(s)
}

/// Lowercases a valid tag into its canonical form.
pub fn canonical_tag(s: &str) -> Option<String> {
    is_valid_tag(s).then(|| s.to_ascii_lowercase())
}

/// Code body of a valid tag, uppercased for the provider alphabet.
pub(crate) fn tag_code(s: &str) -> Option<String> {
    is_valid_tag(s).then(|| s[TAG_PREFIX.len()..].to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_tags() {
        assert!(is_valid_tag("#geo9c3xgv"));
        assert!(is_valid_tag("#geo234567"));
        assert!(is_valid_tag("#geoxwvrqp"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_valid_tag("#GEO9C3XGV"));
        assert!(is_valid_tag("#Geo9c3XGv"));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("#geo"));
        assert!(!is_valid_tag("9c3xgv"));
        assert!(!is_valid_tag("geo9c3xgv"));
        assert!(!is_valid_tag("#geo9c3xg"));
        assert!(!is_valid_tag("#geo9c3xgv2"));
        assert!(!is_valid_tag("##geo9c3xgv"));
        assert!(!is_valid_tag("#geo 9c3xgv"));
        assert!(!is_valid_tag("#geo9c3\nxgv"));
        assert!(!is_valid_tag(" #geo9c3xgv"));
        assert!(!is_valid_tag("#geo9c3xgv "));
    }

    #[test]
    fn test_rejects_excluded_characters() {
        // Every symbol the alphabet deliberately leaves out.
        for c in "01ABDEIKLNOSTUYZ".chars() {
            let tag = format!("#geo2345{c}7");
            assert!(!is_valid_tag(&tag), "accepted {tag}");
            assert!(
                !is_valid_tag(&tag.to_ascii_lowercase()),
                "accepted lowercase {tag}"
            );
        }
    }

    #[test]
    fn test_canonical_tag() {
        assert_eq!(
            canonical_tag("#GEO9C3XGV"),
            Some("#geo9c3xgv".to_string())
        );
        assert_eq!(canonical_tag("#geo9c3xg"), None);
    }

    #[test]
    fn test_tag_code() {
        assert_eq!(tag_code("#geo9c3xgv"), Some("9C3XGV".to_string()));
        assert_eq!(tag_code("not a tag"), None);
    }
}
