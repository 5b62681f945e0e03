//! Geometry Module
//!
//! Rectangle parsing/serialization and the page rotation transform used to
//! place search hits on a rotated page image.
//!
//! ## Usage
//!
//! ```rust
//! use alto_engine::geometry::{parse_rect, rotate, PageDimension};
//!
//! let page = PageDimension::new(1000, 1500);
//! let word = parse_rect("100,200,150,220").unwrap();
//! assert_eq!(rotate(&word, 90, page).to_string(), "1280,100,1300,150");
//! ```

mod rotation;
mod types;

pub use rotation::{rotate, rotate_by, rotate_coordinates, Rotation};
pub use types::{format_rect, parse_rect, PageDimension, Rectangle};

pub(crate) use types::parse_coordinate;
