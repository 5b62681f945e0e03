//! Engine error types
//!
//! Unified error handling for geometry, text extraction and search.

use thiserror::Error;

/// Unified engine error type
#[derive(Debug, Error)]
pub enum AltoError {
    /// Empty ALTO input handed to the text extractor
    #[error("Empty ALTO input")]
    EmptyInput,

    /// No document available for the locator
    #[error("No ALTO document to search")]
    NullDocument,

    /// Coordinate string is not `left,top,right,bottom`
    #[error("Malformed rectangle: {0}")]
    MalformedRectangle(String),

    /// Streaming XML scan failed
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Attribute could not be read during the streaming scan
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Document tree could not be built
    #[error("XML tree error: {0}")]
    Tree(#[from] roxmltree::Error),

    /// Input exceeds the configured size bound
    #[error("Input of {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// IO error (std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AltoError>;
