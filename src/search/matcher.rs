//! Word/phrase matching
//!
//! Two modes, chosen by the word's normalized content:
//!
//! - single token: prefix test against the first search word
//!   (`"cathedral"` matches `"cat"`)
//! - line transcription (content with inner whitespace): substring test of
//!   the joined search words, dropping trailing words until one matches

use super::{normalize_content, normalize_for_search};
use crate::alto::Word;

/// Number of leading `search_words` matched by `word`
pub fn get_match_count<S: AsRef<str>>(word: &Word, search_words: &[S]) -> usize {
    let Some(first) = search_words.first() else {
        return 0;
    };

    let mut content = normalize_content(&word.content);
    let is_line = content.trim_end().contains(char::is_whitespace);
    if !is_line {
        if let Some(full) = &word.substituted_content {
            content = normalize_content(full);
        }
    }
    let content = content.to_lowercase();

    if is_line {
        let terms: Vec<String> = search_words
            .iter()
            .map(|s| normalize_for_search(s.as_ref()))
            .collect();
        return (1..=terms.len())
            .rev()
            .find(|&n| content.contains(&terms[..n].join(" ")))
            .unwrap_or(0);
    }

    let first = normalize_for_search(first.as_ref());
    if !first.is_empty() && content.starts_with(&first) {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    fn word(content: &str) -> Word {
        Word {
            content: content.to_string(),
            rectangle: Rectangle::new(0, 0, 10, 10),
            substituted_content: None,
            hyphenation_part: None,
            hyphenation_part_next: None,
            line: 0,
        }
    }

    #[test]
    fn test_single_token_prefix() {
        assert_eq!(get_match_count(&word("Cathedral"), &["cat"]), 1);
        assert_eq!(get_match_count(&word("dog"), &["cat"]), 0);
        // only the first search word is tested in single-token mode
        assert_eq!(get_match_count(&word("foo"), &["foo", "bar"]), 1);
    }

    #[test]
    fn test_diacritics_ignored() {
        assert_eq!(get_match_count(&word("cafe"), &["café"]), 1);
        assert_eq!(get_match_count(&word("Café"), &["cafe"]), 1);
    }

    #[test]
    fn test_leading_punctuation_trimmed() {
        assert_eq!(get_match_count(&word("„Hello,"), &["hello"]), 1);
    }

    #[test]
    fn test_substituted_content() {
        let mut w = word("Linden-");
        w.substituted_content = Some("Lindenbaum".to_string());
        assert_eq!(get_match_count(&w, &["lindenbaum"]), 1);
    }

    #[test]
    fn test_line_transcription_backoff() {
        let line = word("and then foo bar went home");
        assert_eq!(get_match_count(&line, &["foo", "bar", "baz"]), 2);
        assert_eq!(get_match_count(&line, &["foo", "bar"]), 2);
        assert_eq!(get_match_count(&line, &["went"]), 1);
        assert_eq!(get_match_count(&line, &["baz", "foo"]), 0);
    }

    #[test]
    fn test_line_transcription_ignores_substitution() {
        let mut line = word("two words");
        line.substituted_content = Some("other".to_string());
        assert_eq!(get_match_count(&line, &["other"]), 0);
        assert_eq!(get_match_count(&line, &["words"]), 1);
    }

    #[test]
    fn test_empty_search_words() {
        let empty: [&str; 0] = [];
        assert_eq!(get_match_count(&word("foo"), &empty), 0);
    }
}
