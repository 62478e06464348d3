//! Text extraction: recovering geo tags from free text.
//!
//! Post bodies and report descriptions may carry tags anywhere; extraction
//! finds them without needing the originating coordinate.

use crate::olc::digit_value;
use once_cell::sync::Lazy;
use regex::Regex;

static CANDIDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#geo[23456789cfghjmpqrvwx]{6}").unwrap());

/// Scans text for geo tags, left to right, lowercasing each match.
///
/// Exact-length matches only: a candidate is dropped when it is preceded by
/// another `#` or followed by a further alphabet character (which would make
/// the body longer than six characters). The regex engine has no lookaround,
/// so both boundaries are checked explicitly. Duplicates are preserved;
/// callers dedupe if they need to.
pub fn extract_tags(text: &str) -> Vec<String> {
    CANDIDATE_RE
        .find_iter(text)
        .filter(|m| {
            let doubled_hash = text[..m.start()].chars().next_back() == Some('#');
            let extended = text[m.end()..]
                .chars()
                .next()
                .is_some_and(|c| digit_value(c).is_some());
            !doubled_hash && !extended
        })
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}
