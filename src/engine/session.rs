use crate::{event::Orbit, point::TouchPoint};

/// Per-surface recognition state threaded through the classifier.
#[derive(Clone, Debug, Default)]
pub struct GestureSession {
    base_point: Option<TouchPoint>,
    pinch_baseline: Option<i32>,
    orbit: Orbit,
    has_pinched: bool,
    touch_down_ms: Option<u64>,
    last_tap_ms: Option<u64>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears everything scoped to one contact session. Tap timing survives
    /// so that a double tap can span two sessions.
    pub(crate) fn reset(&mut self) {
        self.base_point = None;
        self.pinch_baseline = None;
        self.orbit.clear();
        self.has_pinched = false;
    }

    pub(crate) fn begin(&mut self, now_ms: u64, point: TouchPoint) {
        self.reset();
        self.touch_down_ms = Some(now_ms);
        self.base_point = Some(point);
        self.orbit.push(point);
    }

    pub(crate) fn record(&mut self, point: TouchPoint) {
        self.orbit.push(point);
    }

    pub(crate) fn set_pinch_baseline(&mut self, distance: i32) {
        self.pinch_baseline = Some(distance);
    }

    pub(crate) fn mark_pinched(&mut self) {
        self.has_pinched = true;
    }

    pub(crate) fn mark_tap(&mut self, now_ms: u64) {
        self.last_tap_ms = Some(now_ms);
    }

    pub fn base_point(&self) -> Option<TouchPoint> {
        self.base_point
    }

    pub fn pinch_baseline(&self) -> Option<i32> {
        self.pinch_baseline
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn has_pinched(&self) -> bool {
        self.has_pinched
    }

    pub fn touch_down_ms(&self) -> Option<u64> {
        self.touch_down_ms
    }

    pub fn last_tap_ms(&self) -> Option<u64> {
        self.last_tap_ms
    }

    pub(crate) fn since_touch_down(&self, now_ms: u64) -> Option<u64> {
        self.touch_down_ms.map(|t_ms| now_ms.saturating_sub(t_ms))
    }

    pub(crate) fn since_last_tap(&self, now_ms: u64) -> Option<u64> {
        self.last_tap_ms.map(|t_ms| now_ms.saturating_sub(t_ms))
    }
}
