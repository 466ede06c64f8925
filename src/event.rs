use serde::{Deserialize, Serialize};

use crate::{
    geometry::{PinchType, SwipeDirection},
    point::TouchPoint,
};

/// Trajectory of the primary contact, oldest sample first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orbit {
    points: Vec<TouchPoint>,
}

impl Orbit {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, point: TouchPoint) {
        self.points.push(point);
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<TouchPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<TouchPoint> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = TouchPoint> + '_ {
        self.points.iter().copied()
    }

    pub fn as_slice(&self) -> &[TouchPoint] {
        &self.points
    }

    /// Consecutive point pairs, i.e. the line segments of an ink trail.
    pub fn segments(&self) -> impl Iterator<Item = (TouchPoint, TouchPoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Vec<TouchPoint>> for Orbit {
    fn from(points: Vec<TouchPoint>) -> Self {
        Self { points }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchData {
    pub point: TouchPoint,
    pub orbit: Orbit,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeData {
    pub first: TouchPoint,
    pub last: TouchPoint,
    /// Angle of `last` seen from `first`; -90 is straight up, 90 straight down.
    pub angle: i32,
    pub distance: i32,
    pub direction: SwipeDirection,
    pub orbit: Orbit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinchData {
    pub point1: TouchPoint,
    pub point2: TouchPoint,
    /// Angle of `point2` seen from `point1`.
    pub angle: i32,
    pub base_distance: i32,
    pub current_distance: i32,
    pub pinch_type: PinchType,
}

impl PinchData {
    /// Signed change against the baseline; negative while pinching in.
    pub fn variation(&self) -> i32 {
        self.current_distance.saturating_sub(self.base_distance)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureEventKind {
    TouchDown(TouchData),
    TouchMove(TouchData),
    TouchUp(TouchData),
    Tap(TouchData),
    DoubleTap(TouchData),
    Swipe(SwipeData),
    Pinch(PinchData),
}

impl GestureEventKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TouchDown(_) => "down",
            Self::TouchMove(_) => "move",
            Self::TouchUp(_) => "up",
            Self::Tap(_) => "tap",
            Self::DoubleTap(_) => "double_tap",
            Self::Swipe(data) => match data.direction {
                SwipeDirection::Up => "swipe_up",
                SwipeDirection::Down => "swipe_down",
                SwipeDirection::Right => "swipe_right",
                SwipeDirection::Left => "swipe_left",
                SwipeDirection::UpperRight => "swipe_upper_right",
                SwipeDirection::UpperLeft => "swipe_upper_left",
                SwipeDirection::BottomRight => "swipe_bottom_right",
                SwipeDirection::BottomLeft => "swipe_bottom_left",
            },
            Self::Pinch(data) => data.pinch_type.as_str(),
        }
    }

    /// The point the event is anchored at: the contact for touch-phase
    /// events, the release point for swipes and the first contact for pinches.
    pub fn point(&self) -> TouchPoint {
        match self {
            Self::TouchDown(data)
            | Self::TouchMove(data)
            | Self::TouchUp(data)
            | Self::Tap(data)
            | Self::DoubleTap(data) => data.point,
            Self::Swipe(data) => data.last,
            Self::Pinch(data) => data.point1,
        }
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        match self {
            Self::TouchDown(data)
            | Self::TouchMove(data)
            | Self::TouchUp(data)
            | Self::Tap(data)
            | Self::DoubleTap(data) => Some(&data.orbit),
            Self::Swipe(data) => Some(&data.orbit),
            Self::Pinch(_) => None,
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(
            self,
            Self::Tap(_) | Self::DoubleTap(_) | Self::Swipe(_) | Self::Pinch(_)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub t_ms: u64,
    pub kind: GestureEventKind,
}

/// Events produced by one frame, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GestureOutput {
    events: Vec<GestureEvent>,
}

impl GestureOutput {
    pub(crate) fn push(&mut self, event: GestureEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GestureEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[GestureEvent] {
        &self.events
    }
}

impl IntoIterator for GestureOutput {
    type Item = GestureEvent;
    type IntoIter = std::vec::IntoIter<GestureEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a GestureOutput {
    type Item = &'a GestureEvent;
    type IntoIter = std::slice::Iter<'a, GestureEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
