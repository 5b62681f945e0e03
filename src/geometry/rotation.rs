//! Page rotation
//!
//! Maps rectangles from the unrotated page frame into the frame of a page
//! displayed rotated clockwise by a quarter-turn multiple.

use super::types::{parse_rect, PageDimension, Rectangle};

/// Clockwise display rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    /// Any value other than 90, 180 or 270 maps to `None`
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees {
            90 => Self::Clockwise90,
            180 => Self::Clockwise180,
            270 => Self::Clockwise270,
            _ => Self::None,
        }
    }

    pub fn degrees(&self) -> i32 {
        match self {
            Self::None => 0,
            Self::Clockwise90 => 90,
            Self::Clockwise180 => 180,
            Self::Clockwise270 => 270,
        }
    }

    /// Page size as seen after this rotation
    pub fn rotated_page(&self, page: PageDimension) -> PageDimension {
        match self {
            Self::Clockwise90 | Self::Clockwise270 => page.transposed(),
            _ => page,
        }
    }
}

/// Rotate `r` into the frame of a page rotated clockwise by `degrees`
///
/// `page` is the unrotated page size.
pub fn rotate(r: &Rectangle, degrees: i32, page: PageDimension) -> Rectangle {
    rotate_by(r, Rotation::from_degrees(degrees), page)
}

/// Like [`rotate`]; a result outside the `i32` range is logged and the
/// rectangle is returned unrotated
pub fn rotate_by(r: &Rectangle, rotation: Rotation, page: PageDimension) -> Rectangle {
    let (x1, y1) = (r.x as i64, r.y as i64);
    let (x2, y2) = (x1 + r.width as i64, y1 + r.height as i64);
    let (w, h) = (page.width as i64, page.height as i64);

    let (nx1, ny1, nx2, ny2) = match rotation {
        Rotation::None => return *r,
        Rotation::Clockwise90 => (h - y2, x1, h - y1, x2),
        Rotation::Clockwise180 => (w - x2, h - y2, w - x1, h - y1),
        Rotation::Clockwise270 => (y1, w - x2, y2, w - x1),
    };

    let corners = [nx1, ny1, nx2, ny2].map(|v| i32::try_from(v).ok());
    let rotated = match corners {
        [Some(left), Some(top), Some(right), Some(bottom)] => {
            Rectangle::from_corners(left, top, right, bottom)
        }
        _ => None,
    };

    rotated.unwrap_or_else(|| {
        tracing::warn!("Rotated rectangle {} out of range, left unrotated", r);
        *r
    })
}

/// Rotate a `left,top,right,bottom` string
///
/// Malformed input is logged and returned unchanged.
pub fn rotate_coordinates(coords: &str, degrees: i32, page: PageDimension) -> String {
    match parse_rect(coords) {
        Ok(r) => rotate(&r, degrees, page).to_string(),
        Err(e) => {
            tracing::warn!("Cannot rotate coordinates {:?}: {}", coords, e);
            coords.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rotate_90_scenario() {
        let page = PageDimension::new(1000, 1500);
        let r = parse_rect("100,200,150,220").unwrap();
        assert_eq!(rotate(&r, 90, page).to_string(), "1280,100,1300,150");
    }

    #[test]
    fn test_rotate_180() {
        let page = PageDimension::new(1000, 1500);
        let r = Rectangle::from_corners(100, 200, 150, 220).unwrap();
        assert_eq!(rotate(&r, 180, page).to_string(), "850,1280,900,1300");
    }

    #[test]
    fn test_rotate_270() {
        let page = PageDimension::new(1000, 1500);
        let r = Rectangle::from_corners(100, 200, 150, 220).unwrap();
        assert_eq!(rotate(&r, 270, page).to_string(), "200,850,220,900");
    }

    #[test]
    fn test_unsupported_degrees_are_identity() {
        let page = PageDimension::new(1000, 1500);
        let r = Rectangle::new(1, 2, 3, 4);
        for degrees in [45, -90, 360, 1] {
            assert_eq!(rotate(&r, degrees, page), r);
        }
    }

    #[test]
    fn test_rotate_out_of_range_left_unrotated() {
        let page = PageDimension::new(i32::MAX, i32::MAX);
        let r = Rectangle::new(-10, -20, 5, 5);
        assert_eq!(rotate(&r, 90, page), r);
    }

    #[test]
    fn test_rotate_coordinates_passthrough() {
        let page = PageDimension::new(1000, 1500);
        assert_eq!(rotate_coordinates("a,b,c", 90, page), "a,b,c");
        assert_eq!(
            rotate_coordinates("100,200,150,220", 90, page),
            "1280,100,1300,150"
        );
    }

    proptest! {
        #[test]
        fn prop_rect_round_trip(x in 0i32..10_000, y in 0i32..10_000, w in 0i32..5_000, h in 0i32..5_000) {
            let r = Rectangle::new(x, y, w, h);
            prop_assert_eq!(parse_rect(&r.to_string()).unwrap(), r);
        }

        #[test]
        fn prop_zero_rotation_fixed_point(x in 0i32..5_000, y in 0i32..5_000, w in 0i32..500, h in 0i32..500,
                                          pw in 0i32..10_000, ph in 0i32..10_000) {
            let r = Rectangle::new(x, y, w, h);
            prop_assert_eq!(rotate(&r, 0, PageDimension::new(pw, ph)), r);
        }

        #[test]
        fn prop_four_quarter_turns_identity(x in 0i32..1_000, y in 0i32..1_000, w in 0i32..500, h in 0i32..500) {
            let r = Rectangle::new(x, y, w, h);
            let mut page = PageDimension::new(2_000, 3_000);
            let mut current = r;
            for _ in 0..4 {
                current = rotate(&current, 90, page);
                page = Rotation::Clockwise90.rotated_page(page);
            }
            prop_assert_eq!(current, r);
        }
    }
}
