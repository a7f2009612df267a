//! Input events and their dispatch
//!
//! The catalog is a closed enum; subscribers register per `EventKind` at
//! startup and receive the dispatch context mutably at emit time.

use crate::vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PausePhysics { is_paused: bool },
    /// Pointer events carry no payload; the position is read from shared state.
    PointerDown,
    PointerMove,
    PointerUp,
    /// Absolute camera target (renderer-side)
    SetCameraTarget { target: Vec2 },
    /// Zoom change as a fraction of the current zoom
    CameraZoom { delta: f32 },
    ToggleDebug,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PausePhysics,
    PointerDown,
    PointerMove,
    PointerUp,
    SetCameraTarget,
    CameraZoom,
    ToggleDebug,
}

impl EventKind {
    pub const COUNT: usize = 7;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PausePhysics { .. } => EventKind::PausePhysics,
            InputEvent::PointerDown => EventKind::PointerDown,
            InputEvent::PointerMove => EventKind::PointerMove,
            InputEvent::PointerUp => EventKind::PointerUp,
            InputEvent::SetCameraTarget { .. } => EventKind::SetCameraTarget,
            InputEvent::CameraZoom { .. } => EventKind::CameraZoom,
            InputEvent::ToggleDebug => EventKind::ToggleDebug,
        }
    }
}

pub type Subscriber<C> = Box<dyn FnMut(&mut C, &InputEvent)>;

/// Per-kind subscriber lists, invoked in registration order
pub struct EventBus<C> {
    subscribers: [Vec<Subscriber<C>>; EventKind::COUNT],
}

impl<C> EventBus<C> {
    pub fn new() -> Self {
        Self {
            subscribers: std::array::from_fn(|_| Vec::new()),
        }
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&mut C, &InputEvent) + 'static) {
        self.subscribe_boxed(kind, Box::new(handler));
    }

    pub fn subscribe_boxed(&mut self, kind: EventKind, handler: Subscriber<C>) {
        self.subscribers[kind.index()].push(handler);
    }

    /// Deliver `event` to every subscriber of its kind. Returns how many ran.
    pub fn emit(&mut self, ctx: &mut C, event: &InputEvent) -> usize {
        let list = &mut self.subscribers[event.kind().index()];
        for handler in list.iter_mut() {
            handler(ctx, event);
        }
        list.len()
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers[kind.index()].len()
    }
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}
