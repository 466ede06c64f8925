//! Gesture recognition over one- and two-contact touch frames.
//!
//! A [`GestureEngine`] consumes [`ContactFrame`]s, each stamped with a
//! caller-supplied millisecond clock, and turns them into raw touch events
//! (down/move/up) and classified gestures (tap, double tap, swipe, pinch).
//! Coordinates are centi-pixels throughout.

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod point;

pub use config::GestureConfig;
pub use dispatch::{GestureDispatcher, GestureListener, GestureSurface, ListenerId};
pub use engine::{GestureEngine, GestureSession};
pub use event::{
    GestureEvent, GestureEventKind, GestureOutput, Orbit, PinchData, SwipeData, TouchData,
};
pub use frame::{Contact, ContactFrame, ContactPhase};
pub use geometry::{PinchType, SwipeDirection};
pub use point::TouchPoint;
