//! Click-outside dismissal
//!
//! A consumer opens the surface; a pointer press outside its anchor
//! closes it. A detached anchor treats every press as outside, so a
//! surface whose anchor disappears cannot get stuck open.

use std::sync::Arc;

use vigil_core::{ElementId, EventKind, UiEvent};

use crate::{Binding, EventHub, Host};

/// Tracks an open dismissable surface anchored to an element
#[derive(Clone, Debug)]
pub struct DismissTracker {
    anchor: ElementId,
    open: bool,
}

impl DismissTracker {
    pub fn new(anchor: ElementId) -> Self {
        DismissTracker {
            anchor,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Consumer-driven transition: open the surface
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Consumer-driven transition: close without a pointer press
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pointer pressed at viewport coordinates. Returns true if the
    /// press closed the surface.
    pub fn on_pointer_down(&mut self, host: &dyn Host, x: f64, y: f64) -> bool {
        if !self.open {
            return false;
        }

        let inside = host
            .element_rect(self.anchor)
            .is_some_and(|rect| rect.contains(x, y));
        if inside {
            return false;
        }

        self.open = false;
        true
    }

    /// Bind to the hub's pointer-down source
    pub fn bind(hub: &EventHub, host: Arc<dyn Host>, anchor: ElementId) -> Binding<Self> {
        Binding::bind(
            hub,
            DismissTracker::new(anchor),
            &[EventKind::PointerDown],
            move |tracker, event| {
                if let UiEvent::PointerDown { x, y } = event {
                    tracker.on_pointer_down(host.as_ref(), *x, *y);
                }
            },
        )
    }
}
