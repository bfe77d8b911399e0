//! Element handles
//!
//! Bindings never hold references into the host's element tree; they
//! refer to elements by opaque handle and read geometry through the
//! host, so a detached element degrades to "no rect" instead of a
//! dangling reference.

use std::fmt;

/// Opaque handle to a host element (anchor, observed box, trigger)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ElementId(pub u64);

impl ElementId {
    #[inline]
    pub fn new(id: u64) -> Self {
        ElementId(id)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "El({})", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
