//! ALTO document model
//!
//! Tree-builder view of an ALTO page: page size, lines and words with
//! hyphenation continuations stored as indices into the page's word list.

mod parser;
mod types;

pub use parser::parse_document;
pub use types::{AltoDocument, HyphenationPart, TextLine, Word};

impl AltoDocument {
    /// Parse ALTO markup (see [`parse_document`])
    pub fn parse(alto: &str) -> crate::error::Result<Self> {
        parse_document(alto)
    }
}
