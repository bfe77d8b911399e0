//! Minimal scripted host for in-crate tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use vigil_core::{ElementId, HostTime, Location, Rect, VigilError, VigilResult};

use crate::Host;

#[derive(Default)]
pub(crate) struct TestHost {
    inner: Mutex<TestHostState>,
    rect_reads: AtomicUsize,
}

#[derive(Default)]
struct TestHostState {
    now: HostTime,
    scroll_x: f64,
    scroll_y: f64,
    location: Option<Location>,
    location_fails: bool,
    rects: HashMap<ElementId, Rect>,
}

impl TestHost {
    pub fn new() -> Self {
        TestHost::default()
    }

    pub fn advance(&self, dt: Duration) {
        let mut state = self.inner.lock();
        state.now = state.now.saturating_add(dt);
    }

    pub fn set_scroll(&self, x: f64, y: f64) {
        let mut state = self.inner.lock();
        state.scroll_x = x;
        state.scroll_y = y;
    }

    pub fn set_location(&self, location: Location) {
        self.inner.lock().location = Some(location);
    }

    pub fn fail_location(&self, fails: bool) {
        self.inner.lock().location_fails = fails;
    }

    pub fn place_element(&self, id: ElementId, rect: Rect) {
        self.inner.lock().rects.insert(id, rect);
    }

    pub fn remove_element(&self, id: ElementId) {
        self.inner.lock().rects.remove(&id);
    }

    pub fn rect_reads(&self) -> usize {
        self.rect_reads.load(Ordering::SeqCst)
    }
}

impl Host for TestHost {
    fn now(&self) -> HostTime {
        self.inner.lock().now
    }

    fn scroll_x(&self) -> f64 {
        self.inner.lock().scroll_x
    }

    fn scroll_y(&self) -> f64 {
        self.inner.lock().scroll_y
    }

    fn location(&self) -> VigilResult<Location> {
        let state = self.inner.lock();
        if state.location_fails {
            return Err(VigilError::LocationUnavailable("scripted failure".into()));
        }
        state
            .location
            .clone()
            .ok_or_else(|| VigilError::LocationUnavailable("no location scripted".into()))
    }

    fn element_rect(&self, id: ElementId) -> Option<Rect> {
        self.rect_reads.fetch_add(1, Ordering::SeqCst);
        self.inner.lock().rects.get(&id).copied()
    }
}
