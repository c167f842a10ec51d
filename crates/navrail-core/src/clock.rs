#![forbid(unsafe_code)]

//! Monotonic time sources.
//!
//! The engine never calls `Instant::now()` directly. All time flows through
//! [`MonotonicClock`], so the scheduler and the suppression windows can be
//! driven by a host event loop in production and by a hand-advanced clock in
//! tests.

use core::time::Duration;

use web_time::Instant;

/// Monotonic clock abstraction.
pub trait MonotonicClock {
    /// Elapsed time since an unspecified epoch, never decreasing.
    fn now_mono(&self) -> Duration;
}

/// Wall-clock-backed monotonic time (`performance.now()` on wasm).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// Create a clock whose epoch is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_mono(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Deterministic monotonic clock controlled by the host or a test.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Set current monotonic time. Earlier values are ignored.
    pub fn set(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Advance monotonic time by `ms` milliseconds.
    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl MonotonicClock for DeterministicClock {
    fn now_mono(&self) -> Duration {
        self.now
    }
}
