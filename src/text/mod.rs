//! Full-text extraction
//!
//! - `annotated`: streaming scan producing reading text with named-entity
//!   markup (`ner-*` spans, `<br>` line breaks)
//! - `plain`: line-per-line text from a parsed document

mod annotated;
mod plain;

pub use annotated::{extract_annotated_text, EntityKind, NamedEntityTag};
pub use plain::extract_plain_text;
