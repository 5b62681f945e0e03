//! ALTO Engine
//!
//! String-in / string-out entry points for the rendering and search layers.
//! Failures are logged and surface as absent text or an empty hit list.

use std::path::Path;

use crate::alto::AltoDocument;
use crate::config::EngineConfig;
use crate::error::{AltoError, Result};
use crate::search::{locate_search_matches, SearchMatch};
use crate::text::{extract_annotated_text, extract_plain_text};

/// Stateless engine; safe to share between threads
#[derive(Debug, Clone, Default)]
pub struct AltoEngine {
    config: EngineConfig,
}

impl AltoEngine {
    /// Create a new engine
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read an ALTO file, enforcing the configured size bound
    pub fn read_file(&self, path: &Path) -> Result<String> {
        let size = std::fs::metadata(path)?.len() as usize;
        if size > self.config.max_input_bytes {
            return Err(AltoError::InputTooLarge {
                size,
                limit: self.config.max_input_bytes,
            });
        }
        Ok(std::fs::read_to_string(path)?)
    }

    /// Full text with named-entity markup, `None` if there is none
    pub fn annotated_text(&self, alto: &str) -> Option<String> {
        let result = self
            .config
            .check_input(alto)
            .and_then(|_| extract_annotated_text(alto));

        match result {
            Ok(text) => Some(text),
            Err(AltoError::EmptyInput) => {
                tracing::debug!("No ALTO content to extract");
                None
            }
            Err(e) => {
                tracing::warn!("Failed to extract ALTO full text: {}", e);
                None
            }
        }
    }

    /// Plain full text, `None` if the document cannot be read
    pub fn plain_text(&self, alto: &str, merge_line_break_words: bool) -> Option<String> {
        match self.parse(alto) {
            Ok(doc) => Some(extract_plain_text(&doc, merge_line_break_words)),
            Err(e) => {
                tracing::warn!("Failed to extract ALTO plain text: {}", e);
                None
            }
        }
    }

    /// Search-hit boxes as `left,top,right,bottom` strings
    pub fn search_coordinates<I, S>(
        &self,
        alto: &str,
        terms: I,
        rotation_degrees: i32,
        footer_height: i32,
    ) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.search_matches(alto, terms, rotation_degrees, footer_height) {
            Ok(matches) => matches
                .iter()
                .flat_map(|m| m.rectangles.iter().map(|r| r.to_string()))
                .collect(),
            Err(e) => {
                tracing::warn!("Failed to locate search terms in ALTO: {}", e);
                Vec::new()
            }
        }
    }

    /// Search-hit occurrences, propagating input errors
    pub fn search_matches<I, S>(
        &self,
        alto: &str,
        terms: I,
        rotation_degrees: i32,
        footer_height: i32,
    ) -> Result<Vec<SearchMatch>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doc = self.parse(alto)?;
        Ok(locate_search_matches(
            &doc,
            terms,
            rotation_degrees,
            footer_height,
        ))
    }

    fn parse(&self, alto: &str) -> Result<AltoDocument> {
        self.config.check_input(alto)?;
        AltoDocument::parse(alto)
    }
}
