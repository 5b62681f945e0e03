//! ALTO tree builder
//!
//! Materializes the first `Page` of an ALTO document into an
//! [`AltoDocument`]. Elements with unusable data are logged and skipped.

use roxmltree::Node;

use super::types::{AltoDocument, HyphenationPart, TextLine, Word};
use crate::error::{AltoError, Result};
use crate::geometry::{parse_coordinate, PageDimension, Rectangle};

/// Parse ALTO markup into a document tree
pub fn parse_document(alto: &str) -> Result<AltoDocument> {
    if alto.trim().is_empty() {
        return Err(AltoError::NullDocument);
    }

    let doc = roxmltree::Document::parse(alto)?;

    let page_node = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "Page");

    let page = match page_node {
        Some(node) => read_page_dimension(node),
        None => {
            tracing::warn!("ALTO document has no Page element");
            PageDimension::default()
        }
    };

    let scope = page_node.unwrap_or_else(|| doc.root_element());
    let mut builder = DocumentBuilder::default();
    for line in scope
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "TextLine")
    {
        builder.push_line(line);
    }

    Ok(builder.finish(page))
}

fn read_page_dimension(node: Node) -> PageDimension {
    let width = node.attribute("WIDTH").and_then(parse_coordinate);
    let height = node.attribute("HEIGHT").and_then(parse_coordinate);

    match (width, height) {
        (Some(width), Some(height)) => PageDimension::new(width, height),
        _ => {
            tracing::warn!(
                "Page has unusable dimensions (WIDTH={:?}, HEIGHT={:?})",
                node.attribute("WIDTH"),
                node.attribute("HEIGHT")
            );
            PageDimension::default()
        }
    }
}

#[derive(Default)]
struct DocumentBuilder {
    lines: Vec<TextLine>,
    words: Vec<Word>,
}

impl DocumentBuilder {
    fn push_line(&mut self, line: Node) {
        let line_index = self.lines.len();
        let start = self.words.len();
        let mut ends_with_hyphen = false;

        for child in line.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "String" => {
                    ends_with_hyphen = false;
                    if let Some(word) = read_word(child, line_index) {
                        self.words.push(word);
                    }
                }
                "HYP" => ends_with_hyphen = true,
                _ => {}
            }
        }

        if ends_with_hyphen && self.words.len() > start {
            if let Some(last) = self.words.last_mut() {
                last.hyphenation_part.get_or_insert(HyphenationPart::First);
            }
        }

        self.lines.push(TextLine {
            words: start..self.words.len(),
        });
    }

    fn finish(mut self, page: PageDimension) -> AltoDocument {
        // A line-ending fragment continues with the first word of a later line
        for i in 0..self.words.len().saturating_sub(1) {
            if self.words[i].hyphenation_part == Some(HyphenationPart::First)
                && self.words[i + 1].line > self.words[i].line
            {
                self.words[i].hyphenation_part_next = Some(i + 1);
            }
        }

        tracing::debug!(
            lines = self.lines.len(),
            words = self.words.len(),
            "Built ALTO document"
        );

        AltoDocument {
            page,
            lines: self.lines,
            words: self.words,
        }
    }
}

fn read_word(node: Node, line: usize) -> Option<Word> {
    let content = node.attribute("CONTENT")?;

    let coords = ["HPOS", "VPOS", "WIDTH", "HEIGHT"].map(|name| {
        node.attribute(name).and_then(parse_coordinate)
    });
    let rectangle = match coords {
        [Some(x), Some(y), Some(width), Some(height)] if width >= 0 && height >= 0 => {
            match Rectangle::checked_new(x, y, width, height) {
                Some(rectangle) => rectangle,
                None => {
                    tracing::warn!("Skipping word {:?} with out-of-range geometry", content);
                    return None;
                }
            }
        }
        _ => {
            tracing::warn!("Skipping word {:?} with unusable geometry", content);
            return None;
        }
    };

    Some(Word {
        content: content.to_string(),
        rectangle,
        substituted_content: node
            .attribute("SUBS_CONTENT")
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
        hyphenation_part: node
            .attribute("SUBS_TYPE")
            .and_then(HyphenationPart::from_subs_type),
        hyphenation_part_next: None,
        line,
    })
}
