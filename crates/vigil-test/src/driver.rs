//! Binding driver
//!
//! Couples an event hub to a scripted host and replays deterministic
//! scripts against them: scroll sequences, navigation, hover timing,
//! mount/unmount cycles. Emission is synchronous, matching the
//! cooperative single-thread model of the real surface.

use std::sync::Arc;
use std::time::Duration;

use vigil_core::{ElementId, Location, Rect, UiEvent, VigilResult};
use vigil_state::EventHub;

use crate::ScriptedHost;

/// Drives a hub and scripted host through deterministic scenarios
#[derive(Default)]
pub struct BindingDriver {
    pub hub: EventHub,
    pub host: Arc<ScriptedHost>,
}

impl BindingDriver {
    pub fn new() -> Self {
        BindingDriver::default()
    }

    /// Emit a single host event
    pub fn emit(&self, event: UiEvent) {
        self.hub.emit(&event);
    }

    /// Advance the clock and deliver a tick
    pub fn tick(&self, dt: Duration) {
        self.host.advance(dt);
        self.hub.emit(&UiEvent::Tick);
    }

    /// Deliver ticks at a fixed interval until `total` has elapsed
    pub fn tick_for(&self, total: Duration, interval: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            let step = interval.min(total - elapsed);
            self.tick(step);
            elapsed += step;
        }
    }

    /// Scroll to a vertical offset and deliver the event
    pub fn scroll_to(&self, y: f64) {
        self.host.set_scroll(0.0, y);
        self.hub.emit(&UiEvent::Scroll { y });
    }

    /// Replace the location and deliver a location-change event
    pub fn navigate(&self, url: &str) -> VigilResult<()> {
        self.host.set_location(Location::parse(url)?);
        self.hub.emit(&UiEvent::LocationChange);
        Ok(())
    }

    /// Replace the location and deliver a hash-change event
    pub fn change_hash(&self, url: &str) -> VigilResult<()> {
        self.host.set_location(Location::parse(url)?);
        self.hub.emit(&UiEvent::HashChange);
        Ok(())
    }

    /// Pointer enters an element
    pub fn pointer_enter(&self, target: ElementId) {
        self.hub.emit(&UiEvent::PointerEnter { target });
    }

    /// Pointer leaves an element
    pub fn pointer_leave(&self, target: ElementId) {
        self.hub.emit(&UiEvent::PointerLeave { target });
    }

    /// Pointer pressed at viewport coordinates
    pub fn pointer_down(&self, x: f64, y: f64) {
        self.hub.emit(&UiEvent::PointerDown { x, y });
    }

    /// Observed element box changed
    pub fn element_resized(&self, target: ElementId, width: f64, height: f64) {
        self.host
            .place_element(target, Rect::new(0.0, 0.0, width, height));
        self.hub.emit(&UiEvent::ElementResize {
            target,
            width,
            height,
        });
    }
}

#[cfg(test)]
mod tests {
    use vigil_state::{Host, ScrollConfig, ScrollVisibilityTracker};

    use super::*;

    #[test]
    fn test_driver_scroll_reaches_bound_tracker() {
        let driver = BindingDriver::new();
        let binding = ScrollVisibilityTracker::bind(&driver.hub, ScrollConfig::default());

        driver.scroll_to(400.0);
        assert!(!binding.read(ScrollVisibilityTracker::visible));

        driver.scroll_to(350.0);
        assert!(binding.read(ScrollVisibilityTracker::visible));
    }

    #[test]
    fn test_tick_for_subdivides_evenly() {
        let driver = BindingDriver::new();
        let before = driver.host.now();

        driver.tick_for(Duration::from_millis(100), Duration::from_millis(30));

        assert_eq!(driver.host.now() - before, Duration::from_millis(100));
    }
}
