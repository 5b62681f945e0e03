//! Search-hit locator
//!
//! Walks the page's word sequence with a forward cursor and collects the
//! boxes of every occurrence of each search phrase, including the
//! continuation fragments of words hyphenated across a line break.

use serde::Serialize;

use super::matcher::get_match_count;
use crate::alto::AltoDocument;
use crate::geometry::{rotate_by, Rectangle, Rotation};

/// One occurrence of a search phrase
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    /// The search phrase as given by the caller
    pub term: String,
    /// One box per matched word or continuation, in reading order
    pub rectangles: Vec<Rectangle>,
}

/// Boxes of all words matching `terms`, flattened
pub fn locate_search_terms<I, S>(
    doc: &AltoDocument,
    terms: I,
    rotation_degrees: i32,
    footer_height: i32,
) -> Vec<Rectangle>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    locate_search_matches(doc, terms, rotation_degrees, footer_height)
        .into_iter()
        .flat_map(|m| m.rectangles)
        .collect()
}

/// Occurrences of `terms` on the page, one [`SearchMatch`] each
///
/// `footer_height` describes the overlay band below the page image; boxes
/// stay in page pixel space and are not shifted by it.
pub fn locate_search_matches<I, S>(
    doc: &AltoDocument,
    terms: I,
    rotation_degrees: i32,
    footer_height: i32,
) -> Vec<SearchMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words = doc.words();
    let page = doc.page();

    let mut rotation = Rotation::from_degrees(rotation_degrees);
    if rotation != Rotation::None && !page.is_usable() {
        tracing::warn!(
            "Page dimensions unavailable, skipping {} degree rotation",
            rotation.degrees()
        );
        rotation = Rotation::None;
    }

    let mut matches = Vec::new();

    for term in terms {
        let term = term.as_ref();
        let search_words: Vec<&str> = term.split_whitespace().collect();
        if search_words.is_empty() {
            continue;
        }

        let mut i = 0;
        while i < words.len() {
            let mut consumed = get_match_count(&words[i], &search_words[..]);
            if consumed == 0 {
                i += 1;
                continue;
            }

            let mut boxes = Vec::new();
            let after_start = collect_word(doc, i, &mut boxes);
            let mut cursor = after_start;

            while consumed < search_words.len() && cursor < words.len() {
                let n = get_match_count(&words[cursor], &search_words[consumed..]);
                if n == 0 {
                    break;
                }
                consumed += n;
                cursor = collect_word(doc, cursor, &mut boxes);
            }

            if consumed == search_words.len() {
                matches.push(SearchMatch {
                    term: term.to_string(),
                    rectangles: boxes
                        .iter()
                        .map(|r| rotate_by(r, rotation, page))
                        .collect(),
                });
                i = cursor;
            } else {
                // Retry from the word after the failed start
                i = after_start;
            }
        }
    }

    tracing::debug!(
        matches = matches.len(),
        rotation = rotation.degrees(),
        footer_height,
        "Located search terms"
    );

    matches
}

/// Push the box of `words[index]` and of its continuation; returns the
/// index after the last word taken
fn collect_word(doc: &AltoDocument, index: usize, boxes: &mut Vec<Rectangle>) -> usize {
    let word = &doc.words()[index];
    boxes.push(word.rectangle);

    match word.hyphenation_part_next {
        Some(next) if next > index => {
            boxes.push(doc.words()[next].rectangle);
            next + 1
        }
        _ => index + 1,
    }
}
