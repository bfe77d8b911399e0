//! Request lifecycle state with generation-guarded commits
//!
//! Overlapping calls through one handle are allowed and never
//! cancelled. Each call takes a generation number when it starts; a
//! settling call commits its outcome only if it is still the latest
//! issued, so a slow stale response cannot clobber a newer one. The
//! caller always receives its own outcome from the call expression,
//! committed or not.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use vigil_core::{ApiResult, AsyncState};

/// Per-call-site holder for one request's `loading/data/error`
/// progression. Clones share the underlying state.
pub struct Lifecycle<T> {
    state: Arc<Mutex<AsyncState<T>>>,
    generation: Arc<AtomicU64>,
}

impl<T> Lifecycle<T> {
    pub fn new() -> Self {
        Lifecycle {
            state: Arc::new(Mutex::new(AsyncState::idle())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }
}

impl<T: Clone> Lifecycle<T> {
    /// Snapshot of the held state
    pub fn snapshot(&self) -> AsyncState<T> {
        self.state.lock().clone()
    }

    /// Drive one call through the lifecycle.
    ///
    /// Marks the state loading (previous error cleared, previous data
    /// retained until settlement), awaits the call, commits the
    /// settlement if this call is still the latest issued, and
    /// re-raises the outcome either way.
    pub async fn run<F>(&self, call: F) -> ApiResult<T>
    where
        F: std::future::Future<Output = ApiResult<T>>,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
        }

        let result = call.await;

        if self.generation.load(Ordering::SeqCst) == generation {
            let mut state = self.state.lock();
            *state = match &result {
                Ok(data) => AsyncState {
                    data: Some(data.clone()),
                    loading: false,
                    error: None,
                },
                Err(error) => AsyncState {
                    data: None,
                    loading: false,
                    error: Some(error.clone()),
                },
            };
        } else {
            tracing::debug!(generation, "dropping stale lifecycle settlement");
        }

        result
    }
}

impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Lifecycle::new()
    }
}

impl<T> Clone for Lifecycle<T> {
    fn clone(&self) -> Self {
        Lifecycle {
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
        }
    }
}
