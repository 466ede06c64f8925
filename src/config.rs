use serde::{Deserialize, Serialize};

pub const DEFAULT_MOVE_THRESHOLD: i32 = 100;
pub const DEFAULT_TAP_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_DOUBLE_TAP_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 1_000;
pub const DEFAULT_PINCH_THRESHOLD: i32 = 1_000;

/// Recognition thresholds. Distances are centi-pixels, intervals milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Minimum travel from the last orbit point before a move is recorded.
    pub move_threshold: i32,
    /// A release counts as a tap only if it comes this soon after the down.
    pub tap_interval_ms: u64,
    /// Maximum gap between the previous tap and a release for a double tap.
    pub double_tap_interval_ms: u64,
    /// Down-to-up travel that must be exceeded for a swipe.
    pub swipe_threshold: i32,
    /// Two-contact distance change needed before a pinch fires.
    pub pinch_threshold: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_threshold: DEFAULT_MOVE_THRESHOLD,
            tap_interval_ms: DEFAULT_TAP_INTERVAL_MS,
            double_tap_interval_ms: DEFAULT_DOUBLE_TAP_INTERVAL_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
        }
    }
}
