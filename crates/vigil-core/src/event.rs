//! Host event definitions
//!
//! Host events are the external, non-deterministic inputs the binding
//! layer consumes: viewport scroll, window and element resize, URL
//! changes, pointer and focus transitions, and the host tick. They
//! arrive independently of the rendering cycle and carry no ordering
//! guarantee across sources.

use crate::ElementId;

/// Event kind classification, used for subscription filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    WindowResize,
    ElementResize,
    HashChange,
    LocationChange,
    PointerDown,
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    Tick,
}

/// A host event delivered to subscribed bindings
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// Vertical scroll offset changed
    Scroll { y: f64 },
    /// Viewport resized
    WindowResize { width: f64, height: f64 },
    /// An observed element's box changed
    ElementResize {
        target: ElementId,
        width: f64,
        height: f64,
    },
    /// URL fragment changed
    HashChange,
    /// Path or query changed
    LocationChange,
    /// Pointer pressed, viewport coordinates
    PointerDown { x: f64, y: f64 },
    /// Pointer entered a bound element
    PointerEnter { target: ElementId },
    /// Pointer left a bound element
    PointerLeave { target: ElementId },
    /// Keyboard focus reached a bound element
    FocusIn { target: ElementId },
    /// Keyboard focus moved off a bound element
    FocusOut { target: ElementId },
    /// Host tick; drives deadline timers
    Tick,
}

impl UiEvent {
    /// Kind of this event, for subscription matching
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Scroll { .. } => EventKind::Scroll,
            UiEvent::WindowResize { .. } => EventKind::WindowResize,
            UiEvent::ElementResize { .. } => EventKind::ElementResize,
            UiEvent::HashChange => EventKind::HashChange,
            UiEvent::LocationChange => EventKind::LocationChange,
            UiEvent::PointerDown { .. } => EventKind::PointerDown,
            UiEvent::PointerEnter { .. } => EventKind::PointerEnter,
            UiEvent::PointerLeave { .. } => EventKind::PointerLeave,
            UiEvent::FocusIn { .. } => EventKind::FocusIn,
            UiEvent::FocusOut { .. } => EventKind::FocusOut,
            UiEvent::Tick => EventKind::Tick,
        }
    }
}
