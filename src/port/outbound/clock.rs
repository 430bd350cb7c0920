//! Monotonic time source port.

use std::time::Instant;

/// Source of monotonic time for history eviction.
///
/// Injected into the history ledger so tests can drive time explicitly.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
