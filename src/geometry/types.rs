//! Geometry types
//!
//! Pixel-space rectangles and page dimensions as used by ALTO.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{AltoError, Result};

/// Pixel-space rectangle
///
/// Externally represented as `left,top,right,bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from position and extent; `None` if a far edge overflows
    pub fn checked_new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        x.checked_add(width)?;
        y.checked_add(height)?;
        Some(Self::new(x, y, width, height))
    }

    /// Build from corner coordinates; `None` if an extent overflows
    pub fn from_corners(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        Some(Self {
            x: left,
            y: top,
            width: right.checked_sub(left)?,
            height: bottom.checked_sub(top)?,
        })
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.right(), self.bottom())
    }
}

impl FromStr for Rectangle {
    type Err = AltoError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rect(s)
    }
}

/// Parse a `left,top,right,bottom` coordinate string
///
/// Each field is read as a float and truncated toward zero, so `"10.9"`
/// becomes `10`.
pub fn parse_rect(s: &str) -> Result<Rectangle> {
    let fields: Vec<&str> = s.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(AltoError::MalformedRectangle(format!(
            "expected 4 fields, found {} in {:?}",
            fields.len(),
            s
        )));
    }

    let mut corners = [0i32; 4];
    for (slot, field) in corners.iter_mut().zip(&fields) {
        *slot = parse_coordinate(field)
            .ok_or_else(|| AltoError::MalformedRectangle(format!("non-numeric field {:?}", field)))?;
    }

    let [left, top, right, bottom] = corners;
    if right < left || bottom < top {
        return Err(AltoError::MalformedRectangle(format!(
            "negative extent in {:?}",
            s
        )));
    }

    Rectangle::from_corners(left, top, right, bottom).ok_or_else(|| {
        AltoError::MalformedRectangle(format!("extent out of range in {:?}", s))
    })
}

/// Serialize a rectangle as `left,top,right,bottom`
pub fn format_rect(r: &Rectangle) -> String {
    r.to_string()
}

/// Parse one numeric ALTO coordinate (`"12"`, `"12.75"`) by truncation
pub(crate) fn parse_coordinate(field: &str) -> Option<i32> {
    let value: f64 = field.trim().parse().ok()?;
    if !value.is_finite() || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i32)
}

/// Physical page size in pixels (unrotated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PageDimension {
    pub width: i32,
    pub height: i32,
}

impl PageDimension {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether the dimension can serve as a rotation reference frame
    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Page size after a quarter-turn swap
    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rect() {
        let r = parse_rect("100,200,150,220").unwrap();
        assert_eq!(r, Rectangle::new(100, 200, 50, 20));
    }

    #[test]
    fn test_parse_rect_whitespace_and_floats() {
        let r = parse_rect("10.9, 20.2,  30.5 ,40").unwrap();
        assert_eq!(r, Rectangle::from_corners(10, 20, 30, 40).unwrap());
    }

    #[test]
    fn test_parse_rect_wrong_field_count() {
        assert!(matches!(
            parse_rect("1,2,3"),
            Err(AltoError::MalformedRectangle(_))
        ));
        assert!(matches!(
            parse_rect("1,2,3,4,5"),
            Err(AltoError::MalformedRectangle(_))
        ));
        assert!(matches!(parse_rect(""), Err(AltoError::MalformedRectangle(_))));
    }

    #[test]
    fn test_parse_rect_non_numeric() {
        assert!(matches!(
            parse_rect("1,two,3,4"),
            Err(AltoError::MalformedRectangle(_))
        ));
        assert!(matches!(
            parse_rect("1,NaN,3,4"),
            Err(AltoError::MalformedRectangle(_))
        ));
    }

    #[test]
    fn test_parse_rect_negative_extent() {
        assert!(parse_rect("50,0,10,10").is_err());
    }

    #[test]
    fn test_parse_rect_extent_overflow() {
        assert!(matches!(
            parse_rect("-2147483648,0,2147483647,1"),
            Err(AltoError::MalformedRectangle(_))
        ));
    }

    #[test]
    fn test_checked_new_rejects_overflowing_edge() {
        assert_eq!(Rectangle::checked_new(i32::MAX, 0, 30, 10), None);
        assert_eq!(
            Rectangle::checked_new(10, 20, 30, 40),
            Some(Rectangle::new(10, 20, 30, 40))
        );
    }

    #[test]
    fn test_format_rect() {
        assert_eq!(format_rect(&Rectangle::new(100, 200, 50, 20)), "100,200,150,220");
    }

    #[test]
    fn test_from_str() {
        let r: Rectangle = "0,0,5,5".parse().unwrap();
        assert_eq!(r.right(), 5);
        assert_eq!(r.bottom(), 5);
    }
}
