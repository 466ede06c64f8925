use crate::{
    config::GestureConfig,
    engine::GestureEngine,
    event::{GestureEvent, GestureEventKind, GestureOutput, PinchData, SwipeData, TouchData},
    frame::ContactFrame,
};

/// Receives gesture events. Every method defaults to doing nothing so a
/// listener only overrides the kinds it cares about.
pub trait GestureListener {
    /// Called for every event before the kind-specific method.
    fn on_event(&mut self, _event: &GestureEvent) {}

    fn on_touch_down(&mut self, _t_ms: u64, _data: &TouchData) {}

    fn on_touch_move(&mut self, _t_ms: u64, _data: &TouchData) {}

    fn on_touch_up(&mut self, _t_ms: u64, _data: &TouchData) {}

    fn on_tap(&mut self, _t_ms: u64, _data: &TouchData) {}

    fn on_double_tap(&mut self, _t_ms: u64, _data: &TouchData) {}

    fn on_swipe(&mut self, _t_ms: u64, _data: &SwipeData) {}

    fn on_pinch(&mut self, _t_ms: u64, _data: &PinchData) {}
}

impl<F> GestureListener for F
where
    F: FnMut(&GestureEvent),
{
    fn on_event(&mut self, event: &GestureEvent) {
        self(event)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered listener list. Events reach listeners in registration order.
#[derive(Default)]
pub struct GestureDispatcher {
    listeners: Vec<(ListenerId, Box<dyn GestureListener>)>,
    next_id: u64,
}

impl GestureDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: impl GestureListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn dispatch(&mut self, output: &GestureOutput) {
        for event in output {
            for (_, listener) in &mut self.listeners {
                deliver(listener.as_mut(), event);
            }
        }
    }
}

fn deliver(listener: &mut dyn GestureListener, event: &GestureEvent) {
    listener.on_event(event);
    let t_ms = event.t_ms;
    match &event.kind {
        GestureEventKind::TouchDown(data) => listener.on_touch_down(t_ms, data),
        GestureEventKind::TouchMove(data) => listener.on_touch_move(t_ms, data),
        GestureEventKind::TouchUp(data) => listener.on_touch_up(t_ms, data),
        GestureEventKind::Tap(data) => listener.on_tap(t_ms, data),
        GestureEventKind::DoubleTap(data) => listener.on_double_tap(t_ms, data),
        GestureEventKind::Swipe(data) => listener.on_swipe(t_ms, data),
        GestureEventKind::Pinch(data) => listener.on_pinch(t_ms, data),
    }
}

/// One touch surface: its engine plus the listeners fed by it.
#[derive(Default)]
pub struct GestureSurface {
    engine: GestureEngine,
    dispatcher: GestureDispatcher,
}

impl GestureSurface {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            engine: GestureEngine::with_config(config),
            dispatcher: GestureDispatcher::new(),
        }
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GestureEngine {
        &mut self.engine
    }

    pub fn dispatcher_mut(&mut self) -> &mut GestureDispatcher {
        &mut self.dispatcher
    }

    /// Classifies the frame and hands every event to the listeners before
    /// returning them.
    pub fn handle_frame(&mut self, now_ms: u64, frame: ContactFrame) -> GestureOutput {
        let output = self.engine.tick(now_ms, frame);
        self.dispatcher.dispatch(&output);
        output
    }
}
