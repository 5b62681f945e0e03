//! Plain full text
//!
//! One output line per `TextLine`, optionally joining words hyphenated
//! across a line break.

use std::borrow::Cow;

use crate::alto::{AltoDocument, Word};

/// Plain text of a parsed page
///
/// With `merge_line_break_words`, a line-ending fragment is replaced by its
/// full form and its continuation is dropped from the next line.
pub fn extract_plain_text(doc: &AltoDocument, merge_line_break_words: bool) -> String {
    let mut lines = Vec::with_capacity(doc.lines().len());
    let mut consumed: Option<usize> = None;

    for line in doc.lines() {
        let mut tokens: Vec<Cow<str>> = Vec::new();

        for index in line.words.clone() {
            if consumed == Some(index) {
                consumed = None;
                continue;
            }

            let word = &doc.words()[index];
            match (merge_line_break_words, word.hyphenation_part_next) {
                (true, Some(next)) => {
                    tokens.push(merged_word(doc, word));
                    consumed = Some(next);
                }
                _ => tokens.push(Cow::Borrowed(word.content.as_str())),
            }
        }

        if !tokens.is_empty() {
            lines.push(tokens.join(" "));
        }
    }

    lines.join("\n")
}

fn merged_word<'a>(doc: &'a AltoDocument, word: &'a Word) -> Cow<'a, str> {
    if let Some(full) = &word.substituted_content {
        return Cow::Borrowed(full.as_str());
    }

    let head = word.content.trim_end_matches(['-', '¬', '\u{2010}', '\u{00AD}']);
    match doc.continuation(word) {
        Some(tail) => Cow::Owned(format!("{}{}", head, tail.content)),
        None => Cow::Borrowed(word.content.as_str()),
    }
}
