//! Host environment abstraction
//!
//! Trackers never touch the browser (or any other host) directly; they
//! read through this trait. The binding logic runs unchanged under a
//! real adapter, a server-side host, or the scripted host used in
//! tests, and degrades safely where a surface is missing.

use vigil_core::{ElementId, HostTime, Location, Rect, VigilResult};

/// Read-only view of the host surface
pub trait Host: Send + Sync {
    /// Current monotonic host time
    fn now(&self) -> HostTime;

    /// Current horizontal scroll offset
    fn scroll_x(&self) -> f64;

    /// Current vertical scroll offset
    fn scroll_y(&self) -> f64;

    /// Snapshot of the current location.
    /// Fails when the host has no location surface; callers treat this
    /// as recoverable.
    fn location(&self) -> VigilResult<Location>;

    /// Viewport-relative bounding box of an element, `None` while it is
    /// not attached
    fn element_rect(&self, id: ElementId) -> Option<Rect>;
}
