//! Search-geometry module
//!
//! Finds words of an ALTO page matching search phrases and returns their
//! bounding boxes, optionally rotated into display orientation.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

mod locator;
mod matcher;

pub use locator::{locate_search_matches, locate_search_terms, SearchMatch};
pub use matcher::get_match_count;

/// Remove diacritical marks (canonical decomposition, combining marks dropped)
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Normalize OCR word content: no diacritics, no leading punctuation
pub fn normalize_content(content: &str) -> String {
    strip_diacritics(content)
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}

/// Normalize a search word: no diacritics, lowercase
pub fn normalize_for_search(term: &str) -> String {
    strip_diacritics(term).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("Café"), "Cafe");
        assert_eq!(strip_diacritics("Naïve Ærø"), "Naive Ærø");
        assert_eq!(strip_diacritics("Straße"), "Straße");
    }

    #[test]
    fn test_normalize_content() {
        assert_eq!(normalize_content("„Überall"), "Uberall");
        assert_eq!(normalize_content("...(word)"), "word)");
        assert_eq!(normalize_content("---"), "");
    }

    #[test]
    fn test_normalize_for_search() {
        assert_eq!(normalize_for_search("Café"), "cafe");
        assert_eq!(normalize_for_search("ÉCOLE"), "ecole");
    }
}
