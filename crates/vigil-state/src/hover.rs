//! Hover-intent tooltip timing and geometry
//!
//! A deliberate delay sits between pointer entry and showing, so
//! incidental passes over the anchor never flash the overlay. The delay
//! is a deadline against the host clock checked on the host tick - not
//! a detached callback - so teardown in any phase cancels it by
//! construction.

use std::sync::Arc;
use std::time::Duration;

use vigil_core::{Edge, ElementId, EventKind, HostTime, TooltipGeometry, UiEvent};

use crate::{Binding, EventHub, Host};

/// Configuration for hover intent
#[derive(Clone, Copy, Debug)]
pub struct HoverConfig {
    /// Delay between pointer entry and showing
    pub delay: Duration,
    /// Edge of the anchor the overlay attaches to
    pub edge: Edge,
    /// Fixed gap between the anchor edge and the overlay
    pub gap: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        HoverConfig {
            delay: Duration::from_millis(300),
            edge: Edge::Top,
            gap: 8.0,
        }
    }
}

/// Hover phase machine: `Hidden -> Pending(deadline) -> Shown`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HoverPhase {
    Hidden,
    /// Timer armed; fires when the deadline passes
    Pending { deadline: HostTime },
    Shown,
}

/// Derives delayed overlay visibility and anchored geometry
pub struct HoverIntentTimer {
    config: HoverConfig,
    anchor: ElementId,
    phase: HoverPhase,
    geometry: Option<TooltipGeometry>,
}

impl HoverIntentTimer {
    pub fn new(anchor: ElementId, config: HoverConfig) -> Self {
        HoverIntentTimer {
            config,
            anchor,
            phase: HoverPhase::Hidden,
            geometry: None,
        }
    }

    pub fn anchor(&self) -> ElementId {
        self.anchor
    }

    pub fn visible(&self) -> bool {
        self.phase == HoverPhase::Shown
    }

    /// Whether the timer is armed but not yet fired
    pub fn pending(&self) -> bool {
        matches!(self.phase, HoverPhase::Pending { .. })
    }

    /// Geometry computed at show time, `None` unless shown
    pub fn geometry(&self) -> Option<TooltipGeometry> {
        self.geometry
    }

    /// Pointer entered (or focus reached) the anchor: arm the timer
    pub fn on_enter(&mut self, now: HostTime) {
        if self.phase == HoverPhase::Hidden {
            self.phase = HoverPhase::Pending {
                deadline: now + self.config.delay,
            };
        }
    }

    /// Pointer left (or focus moved off): cancel or hide.
    /// A pending timer is discarded without ever showing.
    pub fn on_leave(&mut self) {
        self.phase = HoverPhase::Hidden;
        self.geometry = None;
    }

    /// Host tick: fire the deadline if it elapsed. Returns true when
    /// the overlay became visible on this tick.
    pub fn on_tick(&mut self, host: &dyn Host) -> bool {
        let HoverPhase::Pending { deadline } = self.phase else {
            return false;
        };
        if host.now() < deadline {
            return false;
        }

        match self.compute_geometry(host) {
            Some(geometry) => {
                self.phase = HoverPhase::Shown;
                self.geometry = Some(geometry);
                true
            }
            None => {
                // Anchor detached before the deadline fired.
                self.phase = HoverPhase::Hidden;
                false
            }
        }
    }

    /// Scroll or resize while shown: re-anchor the overlay. Hidden and
    /// pending phases never read geometry.
    pub fn on_reposition(&mut self, host: &dyn Host) {
        if self.phase != HoverPhase::Shown {
            return;
        }
        match self.compute_geometry(host) {
            Some(geometry) => self.geometry = Some(geometry),
            None => {
                self.phase = HoverPhase::Hidden;
                self.geometry = None;
            }
        }
    }

    fn compute_geometry(&self, host: &dyn Host) -> Option<TooltipGeometry> {
        let rect = host.element_rect(self.anchor)?;
        Some(TooltipGeometry::anchored(
            rect,
            self.config.edge,
            self.config.gap,
            host.scroll_x(),
            host.scroll_y(),
        ))
    }

    /// Bind to the hub's pointer, focus, tick, and reposition sources
    pub fn bind(
        hub: &EventHub,
        host: Arc<dyn Host>,
        anchor: ElementId,
        config: HoverConfig,
    ) -> Binding<Self> {
        Binding::bind(
            hub,
            HoverIntentTimer::new(anchor, config),
            &[
                EventKind::PointerEnter,
                EventKind::PointerLeave,
                EventKind::FocusIn,
                EventKind::FocusOut,
                EventKind::Tick,
                EventKind::Scroll,
                EventKind::WindowResize,
            ],
            move |timer, event| match event {
                UiEvent::PointerEnter { target } | UiEvent::FocusIn { target }
                    if *target == timer.anchor =>
                {
                    timer.on_enter(host.now());
                }
                UiEvent::PointerLeave { target } | UiEvent::FocusOut { target }
                    if *target == timer.anchor =>
                {
                    timer.on_leave();
                }
                UiEvent::Tick => {
                    timer.on_tick(host.as_ref());
                }
                UiEvent::Scroll { .. } | UiEvent::WindowResize { .. } => {
                    timer.on_reposition(host.as_ref());
                }
                _ => {}
            },
        )
    }
}
