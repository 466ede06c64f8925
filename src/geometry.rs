//! Pure geometry over centi-pixel touch points.
//!
//! Angles are in whole degrees with 0 pointing right of the origin point and
//! positive values turning downward, matching screen coordinates.

use serde::{Deserialize, Serialize};

use crate::point::TouchPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Up,
    Down,
    Right,
    Left,
    UpperRight,
    UpperLeft,
    BottomRight,
    BottomLeft,
}

impl SwipeDirection {
    pub const ALL: [SwipeDirection; 8] = [
        SwipeDirection::Up,
        SwipeDirection::Down,
        SwipeDirection::Right,
        SwipeDirection::Left,
        SwipeDirection::UpperRight,
        SwipeDirection::UpperLeft,
        SwipeDirection::BottomRight,
        SwipeDirection::BottomLeft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
            Self::UpperRight => "upper_right",
            Self::UpperLeft => "upper_left",
            Self::BottomRight => "bottom_right",
            Self::BottomLeft => "bottom_left",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinchType {
    PinchIn,
    PinchOut,
}

impl PinchType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PinchIn => "pinch_in",
            Self::PinchOut => "pinch_out",
        }
    }
}

/// Euclidean distance, truncated to whole centi-pixels.
pub fn distance(from: TouchPoint, to: TouchPoint) -> i32 {
    let dx = to.x() as i128 - from.x() as i128;
    let dy = to.y() as i128 - from.y() as i128;
    let squared = dx * dx + dy * dy;
    let root = (squared as f64).sqrt();
    // Two i32 points are at most ~6.1e9 apart; clamp instead of wrapping.
    root.min(i32::MAX as f64) as i32
}

/// Signed angle of `to` as seen from `from`, in (-180, 180].
pub fn angle(from: TouchPoint, to: TouchPoint) -> i32 {
    let dx = to.x() as f64 - from.x() as f64;
    let dy = to.y() as f64 - from.y() as f64;
    let degrees = dy.atan2(dx).to_degrees().round() as i32;
    if degrees == -180 {
        180
    } else {
        degrees
    }
}

/// Maps an angle onto one of eight octants. Each band is open below and
/// closed above; whatever falls outside the seven explicit bands is `Left`.
pub fn angle_to_direction(angle: i32) -> SwipeDirection {
    match angle {
        -156..=-112 => SwipeDirection::UpperLeft,
        -111..=-67 => SwipeDirection::Up,
        -66..=-22 => SwipeDirection::UpperRight,
        -21..=22 => SwipeDirection::Right,
        23..=67 => SwipeDirection::BottomRight,
        68..=112 => SwipeDirection::Down,
        113..=157 => SwipeDirection::BottomLeft,
        _ => SwipeDirection::Left,
    }
}

pub fn pinch_type(base_distance: i32, current_distance: i32) -> PinchType {
    if current_distance < base_distance {
        PinchType::PinchIn
    } else {
        PinchType::PinchOut
    }
}
