//! End-to-end binding scenarios
//!
//! Exercises complete flows across the hub, the scripted host, and the
//! trackers: mount/unmount cycles, registration-key changes, and
//! cross-source interleavings. The release contract is the
//! failure-prone one, so it gets the scenario treatment rather than a
//! single unit assertion.

use vigil_state::{ScrollConfig, ScrollVisibilityTracker};

use crate::BindingDriver;

/// Mount and drop a scroll binding `cycles` times, scrolling between
/// mounts, and report the number of listeners still registered.
pub fn mount_unmount_cycles(driver: &BindingDriver, cycles: usize) -> usize {
    for round in 0..cycles {
        let binding = ScrollVisibilityTracker::bind(&driver.hub, ScrollConfig::default());
        driver.scroll_to(100.0 + round as f64);
        let _ = binding.read(ScrollVisibilityTracker::visible);
        drop(binding);
    }
    driver.hub.subscriber_count()
}

/// Replay a scroll offset script against a fresh binding, returning
/// the final visibility
pub fn scroll_script(driver: &BindingDriver, offsets: &[f64]) -> bool {
    let binding = ScrollVisibilityTracker::bind(&driver.hub, ScrollConfig::default());
    for &y in offsets {
        driver.scroll_to(y);
    }
    binding.read(ScrollVisibilityTracker::visible)
}
