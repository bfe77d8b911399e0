//! Scroll-driven chrome visibility
//!
//! Every scroll tick is processed - no debouncing - so the update is
//! O(1) against the previous offset and performs no host reads.

use vigil_core::{EventKind, UiEvent};

use crate::{Binding, EventHub};

/// Configuration for scroll visibility
#[derive(Clone, Copy, Debug)]
pub struct ScrollConfig {
    /// Offset below which the chrome is always visible
    pub threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig { threshold: 50.0 }
    }
}

/// Scroll state snapshot: the recorded offset and the derived flag.
/// Mutated only by the scroll listener; read-only to consumers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub last_y: f64,
    pub visible: bool,
}

/// Derives a "chrome visible" flag from vertical scroll direction.
///
/// Scrolling up, or sitting above the threshold, shows the chrome;
/// scrolling down past the threshold hides it; anything else leaves it
/// unchanged. The latest offset is always recorded as the basis for the
/// next comparison.
#[derive(Clone, Debug)]
pub struct ScrollVisibilityTracker {
    threshold: f64,
    last_y: f64,
    visible: bool,
}

impl ScrollVisibilityTracker {
    pub fn new(config: ScrollConfig) -> Self {
        ScrollVisibilityTracker {
            threshold: config.threshold,
            last_y: 0.0,
            visible: true,
        }
    }

    /// Process one scroll tick. Returns true if visibility changed.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let was = self.visible;

        if y < self.last_y || y < self.threshold {
            self.visible = true;
        } else if y > self.last_y && y > self.threshold {
            self.visible = false;
        }
        self.last_y = y;

        self.visible != was
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Offset recorded by the last tick
    pub fn last_offset(&self) -> f64 {
        self.last_y
    }

    /// Current snapshot
    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            last_y: self.last_y,
            visible: self.visible,
        }
    }

    /// Bind to the hub's scroll source
    pub fn bind(hub: &EventHub, config: ScrollConfig) -> Binding<Self> {
        Binding::bind(
            hub,
            ScrollVisibilityTracker::new(config),
            &[EventKind::Scroll],
            |tracker, event| {
                if let UiEvent::Scroll { y } = event {
                    tracker.on_scroll(*y);
                }
            },
        )
    }
}
