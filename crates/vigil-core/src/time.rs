//! Host time primitive
//!
//! Deadlines in the binding layer are expressed against the host's
//! monotonic clock instead of being armed as detached callbacks, so a
//! dropped tracker can never be touched by a timer that outlived it.

use std::ops::{Add, Sub};
use std::time::Duration;

/// Monotonic host time, microseconds since host start
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    pub const ZERO: HostTime = HostTime(0);

    #[inline]
    pub fn from_micros(micros: u64) -> Self {
        HostTime(micros)
    }

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        HostTime(millis * 1000)
    }

    #[inline]
    pub fn as_micros(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0 / 1000
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        HostTime(self.0.saturating_add(duration.as_micros() as u64))
    }
}

impl Add<Duration> for HostTime {
    type Output = HostTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        HostTime(self.0 + rhs.as_micros() as u64)
    }
}

impl Sub<HostTime> for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: HostTime) -> Self::Output {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Debug for HostTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t+{:.3}ms", self.as_micros() as f64 / 1000.0)
    }
}
