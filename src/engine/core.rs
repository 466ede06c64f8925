use log::{debug, trace};
use statig::{blocking::IntoStateMachineExt as _, prelude::*};

use super::session::GestureSession;
use crate::{
    config::GestureConfig,
    event::{GestureEvent, GestureEventKind, GestureOutput, PinchData, SwipeData, TouchData},
    frame::{Contact, ContactFrame, ContactPhase},
    geometry,
    point::TouchPoint,
};

#[derive(Clone, Copy, Debug)]
enum GestureHsmEvent {
    Frame { now_ms: u64, frame: ContactFrame },
}

#[derive(Debug, Default)]
struct DispatchContext {
    config: GestureConfig,
    output: GestureOutput,
}

impl DispatchContext {
    fn new(config: GestureConfig) -> Self {
        Self {
            config,
            output: GestureOutput::default(),
        }
    }

    fn emit(&mut self, t_ms: u64, kind: GestureEventKind) {
        self.output.push(GestureEvent { t_ms, kind });
    }

    fn finish(self) -> GestureOutput {
        self.output
    }
}

/// Classifies one surface's contact frames into gesture events.
pub struct GestureEngine {
    machine: statig::blocking::StateMachine<GestureHsm>,
    config: GestureConfig,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEngine {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            machine: GestureHsm::new().state_machine(),
            config,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the thresholds. Takes effect from the next frame; the
    /// current session keeps its accumulated state.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    pub fn session(&self) -> &GestureSession {
        &self.machine.session
    }

    pub fn is_touching(&self) -> bool {
        self.machine.touching
    }

    /// Processes one frame to completion and returns what it produced.
    pub fn tick(&mut self, now_ms: u64, frame: ContactFrame) -> GestureOutput {
        let mut context = DispatchContext::new(self.config);
        self.machine
            .handle_with_context(&GestureHsmEvent::Frame { now_ms, frame }, &mut context);
        context.finish()
    }
}

struct GestureHsm {
    session: GestureSession,
    touching: bool,
}

impl GestureHsm {
    fn new() -> Self {
        Self {
            session: GestureSession::new(),
            touching: false,
        }
    }

    fn touch_data(&self, point: TouchPoint) -> TouchData {
        TouchData {
            point,
            orbit: self.session.orbit().clone(),
        }
    }

    fn begin_session(&mut self, context: &mut DispatchContext, now_ms: u64, point: TouchPoint) {
        debug!("touch session start at ({}, {})", point.x(), point.y());
        self.session.begin(now_ms, point);
        self.touching = true;
        let data = self.touch_data(point);
        context.emit(now_ms, GestureEventKind::TouchDown(data));
    }

    fn track_move(&mut self, context: &mut DispatchContext, now_ms: u64, point: TouchPoint) {
        let Some(last) = self.session.orbit().last() else {
            return;
        };
        let travel = geometry::distance(last, point);
        if travel < context.config.move_threshold {
            trace!(
                "move sample dropped: travel {} < {}",
                travel,
                context.config.move_threshold
            );
            return;
        }
        self.session.record(point);
        let data = self.touch_data(point);
        context.emit(now_ms, GestureEventKind::TouchMove(data));
    }

    fn release(&mut self, context: &mut DispatchContext, now_ms: u64, point: TouchPoint) {
        self.session.record(point);
        self.touching = false;
        let data = self.touch_data(point);
        context.emit(now_ms, GestureEventKind::TouchUp(data));
    }

    /// Handles the second contact of a frame. Returns whether it consumed the
    /// frame's exclusive slot, which rules out release classification.
    fn apply_secondary(
        &mut self,
        context: &mut DispatchContext,
        now_ms: u64,
        primary: TouchPoint,
        secondary: Option<Contact>,
    ) -> bool {
        let Some(secondary) = secondary else {
            return false;
        };
        match secondary.phase {
            ContactPhase::Down => {
                let baseline = geometry::distance(primary, secondary.point);
                trace!("pinch baseline set to {baseline}");
                self.session.set_pinch_baseline(baseline);
                true
            }
            ContactPhase::Move => {
                self.track_pinch(context, now_ms, primary, secondary.point);
                true
            }
            ContactPhase::Up => false,
        }
    }

    fn track_pinch(
        &mut self,
        context: &mut DispatchContext,
        now_ms: u64,
        point1: TouchPoint,
        point2: TouchPoint,
    ) {
        let current = geometry::distance(point1, point2);
        let Some(baseline) = self.session.pinch_baseline() else {
            // Second contact was never seen going down; start tracking here.
            self.session.set_pinch_baseline(current);
            return;
        };
        if (baseline as i64 - current as i64).abs() < context.config.pinch_threshold as i64 {
            return;
        }

        let pinch = PinchData {
            point1,
            point2,
            angle: geometry::angle(point1, point2),
            base_distance: baseline,
            current_distance: current,
            pinch_type: geometry::pinch_type(baseline, current),
        };
        debug!(
            "{} {} -> {} at {} deg",
            pinch.pinch_type.as_str(),
            baseline,
            current,
            pinch.angle
        );
        self.session.mark_pinched();
        self.session.set_pinch_baseline(current);
        context.emit(now_ms, GestureEventKind::Pinch(pinch));
    }

    fn classify_release(&mut self, context: &mut DispatchContext, now_ms: u64, point: TouchPoint) {
        if let Some(swipe) = self.classify_swipe(context, point) {
            debug!(
                "swipe {} distance {} angle {}",
                swipe.direction.as_str(),
                swipe.distance,
                swipe.angle
            );
            context.emit(now_ms, GestureEventKind::Swipe(swipe));
            return;
        }

        let config = context.config;
        let within_tap = self
            .session
            .since_touch_down(now_ms)
            .is_some_and(|elapsed| elapsed < config.tap_interval_ms);
        if !within_tap {
            trace!("release outside tap window");
            return;
        }

        let within_double_tap = self
            .session
            .since_last_tap(now_ms)
            .is_some_and(|elapsed| elapsed < config.double_tap_interval_ms);
        let data = self.touch_data(point);
        if within_double_tap {
            debug!("double tap at ({}, {})", point.x(), point.y());
            context.emit(now_ms, GestureEventKind::DoubleTap(data));
        } else {
            debug!("tap at ({}, {})", point.x(), point.y());
            self.session.mark_tap(now_ms);
            context.emit(now_ms, GestureEventKind::Tap(data));
        }
    }

    fn classify_swipe(&self, context: &DispatchContext, release: TouchPoint) -> Option<SwipeData> {
        if self.session.has_pinched() {
            return None;
        }
        let first = self.session.base_point()?;
        let distance = geometry::distance(first, release);
        if distance <= context.config.swipe_threshold {
            return None;
        }

        let angle = geometry::angle(first, release);
        Some(SwipeData {
            first,
            last: release,
            angle,
            distance,
            direction: geometry::angle_to_direction(angle),
            orbit: self.session.orbit().clone(),
        })
    }
}

#[state_machine(initial = "State::idle()")]
impl GestureHsm {
    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &GestureHsmEvent) -> Outcome<State> {
        match event {
            GestureHsmEvent::Frame { now_ms, frame } => {
                let Some(primary) = frame.primary() else {
                    return Handled;
                };
                match primary.phase {
                    ContactPhase::Down => {
                        self.begin_session(context, *now_ms, primary.point);
                        self.apply_secondary(context, *now_ms, primary.point, frame.secondary());
                        Transition(State::touching())
                    }
                    phase => {
                        trace!("{} without an active session ignored", phase.as_str());
                        Handled
                    }
                }
            }
        }
    }

    #[state]
    fn touching(
        &mut self,
        context: &mut DispatchContext,
        event: &GestureHsmEvent,
    ) -> Outcome<State> {
        match event {
            GestureHsmEvent::Frame { now_ms, frame } => {
                let Some(primary) = frame.primary() else {
                    return Handled;
                };
                let now_ms = *now_ms;
                match primary.phase {
                    ContactPhase::Down => {
                        self.begin_session(context, now_ms, primary.point);
                        self.apply_secondary(context, now_ms, primary.point, frame.secondary());
                        Handled
                    }
                    ContactPhase::Move => {
                        self.track_move(context, now_ms, primary.point);
                        self.apply_secondary(context, now_ms, primary.point, frame.secondary());
                        Handled
                    }
                    ContactPhase::Up => {
                        self.release(context, now_ms, primary.point);
                        if !self.apply_secondary(context, now_ms, primary.point, frame.secondary())
                        {
                            self.classify_release(context, now_ms, primary.point);
                        }
                        Transition(State::idle())
                    }
                }
            }
        }
    }
}
