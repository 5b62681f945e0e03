//! ALTO document types
//!
//! Materialized page → line → word structure used by the locator and the
//! plain-text extractor.

use crate::geometry::{PageDimension, Rectangle};

/// Role of a word in a hyphenated pair (`SUBS_TYPE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenationPart {
    /// Word ends a line with a hyphen (`HypPart1`)
    First,
    /// Word continues the previous line's fragment (`HypPart2`)
    Second,
}

impl HyphenationPart {
    pub fn from_subs_type(value: &str) -> Option<Self> {
        match value {
            "HypPart1" => Some(Self::First),
            "HypPart2" => Some(Self::Second),
            _ => None,
        }
    }
}

/// A recognized word (`String` element)
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Recognized text (`CONTENT`)
    pub content: String,
    /// Bounding box in unrotated page pixels
    pub rectangle: Rectangle,
    /// Full de-hyphenated form (`SUBS_CONTENT`)
    pub substituted_content: Option<String>,
    pub hyphenation_part: Option<HyphenationPart>,
    /// Index of the continuation fragment on the next line
    pub hyphenation_part_next: Option<usize>,
    /// Index of the owning line
    pub line: usize,
}

/// A text line; `words` indexes into [`AltoDocument::words`]
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub words: std::ops::Range<usize>,
}

/// Parsed ALTO page
#[derive(Debug, Clone, Default)]
pub struct AltoDocument {
    pub(crate) page: PageDimension,
    pub(crate) lines: Vec<TextLine>,
    pub(crate) words: Vec<Word>,
}

impl AltoDocument {
    /// Unrotated page size; `(0,0)` when the page carries no usable size
    pub fn page(&self) -> PageDimension {
        self.page
    }

    /// All words in document order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Words of one line in reading order
    pub fn line_words(&self, line: &TextLine) -> &[Word] {
        &self.words[line.words.clone()]
    }

    /// The continuation fragment of `word`, if it is hyphenated
    pub fn continuation(&self, word: &Word) -> Option<&Word> {
        word.hyphenation_part_next.and_then(|i| self.word(i))
    }
}
