//! Observed-element dimension tracking
//!
//! Tracks one element's box through the host's resize observer and
//! exposes only the latest bounded snapshot - no history. The element
//! not existing yet is normal: the tracker holds the configured
//! minimums as base dimensions until the first observation arrives.

use vigil_core::{Dimensions, ElementId, EventKind, Margins, UiEvent};

use crate::{Binding, EventHub, Host};

/// Configuration for dimension tracking.
///
/// The minimums must cover the margins on their axis
/// (`min_width >= margin.left + margin.right`, symmetric for height);
/// the bounded dimensions are then non-negative for every observed
/// size.
#[derive(Clone, Copy, Debug, Default)]
pub struct DimensionConfig {
    pub min_width: f64,
    pub min_height: f64,
    pub margin: Margins,
}

/// Derives bounded content dimensions from an observed element box
#[derive(Clone, Debug)]
pub struct ResizeDimensionTracker {
    config: DimensionConfig,
    target: ElementId,
    dimensions: Dimensions,
}

impl ResizeDimensionTracker {
    /// Start from the configured minimums as base dimensions
    pub fn new(target: ElementId, config: DimensionConfig) -> Self {
        ResizeDimensionTracker {
            config,
            target,
            dimensions: Dimensions::bounded(
                0.0,
                0.0,
                config.min_width,
                config.min_height,
                config.margin,
            ),
        }
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    /// Latest snapshot
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Eager measure at attach time; a not-yet-attached element keeps
    /// the base dimensions
    pub fn measure(&mut self, host: &dyn Host) -> bool {
        match host.element_rect(self.target) {
            Some(rect) => self.on_observed(rect.width, rect.height),
            None => false,
        }
    }

    /// Process one observed box change. Returns true if the snapshot
    /// changed.
    pub fn on_observed(&mut self, width: f64, height: f64) -> bool {
        let next = Dimensions::bounded(
            width,
            height,
            self.config.min_width,
            self.config.min_height,
            self.config.margin,
        );

        if next != self.dimensions {
            self.dimensions = next;
            true
        } else {
            false
        }
    }

    /// Bind to the hub's element-resize source, measuring eagerly
    pub fn bind(
        hub: &EventHub,
        host: &dyn Host,
        target: ElementId,
        config: DimensionConfig,
    ) -> Binding<Self> {
        let mut tracker = ResizeDimensionTracker::new(target, config);
        tracker.measure(host);

        Binding::bind(
            hub,
            tracker,
            &[EventKind::ElementResize],
            move |tracker, event| {
                if let UiEvent::ElementResize {
                    target,
                    width,
                    height,
                } = event
                {
                    if *target == tracker.target {
                        tracker.on_observed(*width, *height);
                    }
                }
            },
        )
    }
}
