use serde::{Deserialize, Serialize};

use crate::geometry;

pub const CENTI_PIXELS_PER_PIXEL: i32 = 100;

/// A contact position in centi-pixels (1/100 px).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchPoint {
    x: i32,
    y: i32,
}

impl TouchPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn from_pixels(x: i32, y: i32) -> Self {
        Self {
            x: x.saturating_mul(CENTI_PIXELS_PER_PIXEL),
            y: y.saturating_mul(CENTI_PIXELS_PER_PIXEL),
        }
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    /// Whole pixels, truncated toward zero.
    pub const fn pixel_x(self) -> i32 {
        self.x / CENTI_PIXELS_PER_PIXEL
    }

    pub const fn pixel_y(self) -> i32 {
        self.y / CENTI_PIXELS_PER_PIXEL
    }

    pub fn distance_to(self, other: TouchPoint) -> i32 {
        geometry::distance(other, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_accessors_truncate_toward_zero() {
        let point = TouchPoint::new(12_345, 99);
        assert_eq!(point.pixel_x(), 123);
        assert_eq!(point.pixel_y(), 0);

        let negative = TouchPoint::new(-150, -99);
        assert_eq!(negative.pixel_x(), -1);
        assert_eq!(negative.pixel_y(), 0);
    }

    #[test]
    fn from_pixels_scales_to_centi_pixels() {
        let point = TouchPoint::from_pixels(12, -3);
        assert_eq!(point, TouchPoint::new(1200, -300));
        assert_eq!(point.pixel_x(), 12);
        assert_eq!(point.pixel_y(), -3);
    }

    #[test]
    fn distance_to_matches_geometry() {
        let a = TouchPoint::new(0, 0);
        let b = TouchPoint::new(600, 800);
        assert_eq!(a.distance_to(b), 1000);
        assert_eq!(b.distance_to(a), 1000);
    }
}
