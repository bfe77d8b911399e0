//! Active-section resolution from the location surface
//!
//! The section value has two sources of truth - the URL fragment and
//! one query parameter - merged into a single [`ActiveState`] snapshot.
//! The first in-scope pass always commits; later passes commit only on
//! a value change, so downstream consumers re-render exactly when the
//! resolved pair actually moved.

use std::sync::Arc;

use vigil_core::{ActiveState, EventKind};

use crate::{Binding, EventHub, Host};

/// Configuration for section resolution
#[derive(Clone, Debug)]
pub struct SectionConfig {
    /// Path prefix that activates resolution
    pub scope: String,
    /// Query parameter carrying the section value
    pub param: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        SectionConfig {
            scope: "/examples".to_string(),
            param: "section".to_string(),
        }
    }
}

/// Outcome of one resolution pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Path out of scope; held state untouched
    Skipped,
    /// Recomputed pair equals the held one; no commit
    Unchanged,
    /// New pair committed (wholesale replacement)
    Committed(ActiveState),
}

/// Resolver phase. The first pass always commits; making the phase
/// explicit keeps that rule a visible transition instead of a hidden
/// flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Initialized,
}

/// Derives `{section, category}` from the location surface
pub struct ActiveSectionResolver {
    config: SectionConfig,
    phase: Phase,
    state: ActiveState,
}

impl ActiveSectionResolver {
    pub fn new(config: SectionConfig) -> Self {
        ActiveSectionResolver {
            config,
            phase: Phase::Uninitialized,
            state: ActiveState::default(),
        }
    }

    /// Currently held pair
    pub fn state(&self) -> &ActiveState {
        &self.state
    }

    /// Run one resolution pass against the host location.
    ///
    /// A failed location read is recoverable: the held state resets to
    /// neutral and nothing propagates.
    pub fn resolve(&mut self, host: &dyn Host) -> Resolution {
        let location = match host.location() {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!("location read failed, resetting active section: {e}");
                self.phase = Phase::Initialized;
                self.state = ActiveState::default();
                return Resolution::Committed(self.state.clone());
            }
        };

        if !location.has_path_prefix(&self.config.scope) {
            return Resolution::Skipped;
        }

        let next = ActiveState::resolve(&location, &self.config.param);
        let first = self.phase == Phase::Uninitialized;
        self.phase = Phase::Initialized;

        if first || next != self.state {
            self.state = next.clone();
            Resolution::Committed(next)
        } else {
            Resolution::Unchanged
        }
    }

    /// Bind to the hub's location sources, resolving once at mount and
    /// again on every hash or location change
    pub fn bind(hub: &EventHub, host: Arc<dyn Host>, config: SectionConfig) -> Binding<Self> {
        let mut resolver = ActiveSectionResolver::new(config);
        resolver.resolve(host.as_ref());

        Binding::bind(
            hub,
            resolver,
            &[EventKind::HashChange, EventKind::LocationChange],
            move |resolver, _| {
                resolver.resolve(host.as_ref());
            },
        )
    }
}
