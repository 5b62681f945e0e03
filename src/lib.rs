//! ALTO Engine Library
//!
//! Turns ALTO OCR documents into annotated reading text and into pixel
//! boxes of search hits, corrected for page rotation.
//!
//! # Modules
//!
//! - `geometry`: rectangles and the rotation transform
//! - `alto`: materialized page → line → word tree
//! - `text`: streaming annotated full text and plain text
//! - `search`: hyphenation-aware phrase matching and hit geometry
//! - `engine`: string-level facade with the absent-on-failure policy
//!
//! # Usage
//!
//! ```rust,ignore
//! use alto_engine::{AltoEngine, EngineConfig};
//!
//! let engine = AltoEngine::new(EngineConfig::from_env());
//!
//! let text = engine.annotated_text(&alto);
//! let boxes = engine.search_coordinates(&alto, ["lindenbaum"], 90, 0);
//! ```

pub mod alto;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod search;
pub mod text;

pub use config::EngineConfig;
pub use engine::AltoEngine;
pub use error::{AltoError, Result};
