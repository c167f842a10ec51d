#![forbid(unsafe_code)]

//! Coalescing of high-frequency triggers into bounded-rate work.
//!
//! Both the transcript and its viewport can emit signals far faster than the
//! navigator needs to react. Two independent channels collapse bursts:
//!
//! - **Rebuild** ([`CoalescingChannel`]): the first mutation signal arms a
//!   deadline a fixed delay ahead; later signals are dropped until the
//!   rebuild runs. At most one rebuild per debounce window.
//! - **Recompute** ([`FrameGate`]): the first scroll signal requests the next
//!   animation frame; later signals are dropped until that frame. At most one
//!   recompute per rendered frame.
//!
//! # Design
//!
//! The scheduler owns no timers. The host asks [`UpdateScheduler::next_deadline`]
//! and [`UpdateScheduler::wants_frame`] when to call back, and the navigator
//! drains due work with [`UpdateScheduler::take_due_rebuild`] and
//! [`UpdateScheduler::take_frame_recompute`]. Tests drive it with a fake
//! clock and explicit frame calls.
//!
//! # Usage
//!
//! ```
//! use core::time::Duration;
//! use navrail_runtime::update_scheduler::UpdateScheduler;
//!
//! let mut s = UpdateScheduler::new(Duration::from_millis(200));
//! let t0 = Duration::ZERO;
//!
//! assert!(s.signal_mutation(t0));
//! assert!(!s.signal_mutation(t0 + Duration::from_millis(50)));
//! assert!(!s.take_due_rebuild(t0 + Duration::from_millis(199)));
//! assert!(s.take_due_rebuild(t0 + Duration::from_millis(200)));
//!
//! assert!(s.signal_scroll());
//! assert!(!s.signal_scroll());
//! assert!(s.take_frame_recompute());
//! assert!(!s.take_frame_recompute());
//! ```

use core::time::Duration;

/// Per-channel counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelStats {
    /// Raw signals received.
    pub signals: u64,
    /// Signals dropped because work was already pending.
    pub coalesced: u64,
    /// Scheduled runs that executed.
    pub runs: u64,
    /// Pending runs that were cancelled before executing.
    pub cancelled: u64,
}

/// A one-shot debounce channel with a monotonic deadline.
///
/// `pending` is exactly `deadline.is_some()`.
#[derive(Debug, Clone)]
pub struct CoalescingChannel {
    delay: Duration,
    deadline: Option<Duration>,
    stats: ChannelStats,
}

impl CoalescingChannel {
    /// Create an idle channel with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            stats: ChannelStats::default(),
        }
    }

    /// Record a trigger at `now`.
    ///
    /// Returns `true` if this signal armed the channel, `false` if it was
    /// coalesced into an already-pending run.
    pub fn signal(&mut self, now: Duration) -> bool {
        self.stats.signals += 1;
        if self.deadline.is_some() {
            self.stats.coalesced += 1;
            return false;
        }
        self.deadline = Some(now.saturating_add(self.delay));
        true
    }

    /// Consume the pending run if its deadline has passed.
    pub fn take_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.stats.runs += 1;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending run, if any.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            self.stats.cancelled += 1;
        }
    }

    /// Whether a run is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending run becomes due.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Counters.
    #[must_use]
    pub const fn stats(&self) -> ChannelStats {
        self.stats
    }
}

/// A one-shot channel released at the next animation frame.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    pending: bool,
    stats: ChannelStats,
}

impl FrameGate {
    /// Create an idle gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger. Returns `true` if a frame must now be requested.
    pub fn signal(&mut self) -> bool {
        self.stats.signals += 1;
        if self.pending {
            self.stats.coalesced += 1;
            return false;
        }
        self.pending = true;
        true
    }

    /// Consume the pending run at a frame boundary.
    pub fn take_frame(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.stats.runs += 1;
        true
    }

    /// Drop the pending run, if any.
    pub fn cancel(&mut self) {
        if self.pending {
            self.pending = false;
            self.stats.cancelled += 1;
        }
    }

    /// Whether a run waits for the next frame.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Counters.
    #[must_use]
    pub const fn stats(&self) -> ChannelStats {
        self.stats
    }
}

/// Snapshot of both channels' counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Rebuild channel.
    pub rebuild: ChannelStats,
    /// Recompute channel.
    pub recompute: ChannelStats,
}

/// The two named coalescing channels of the navigator.
///
/// # Thread Safety
///
/// Not thread-safe. Lives on the host's single UI thread alongside the
/// navigator that owns it.
#[derive(Debug, Clone)]
pub struct UpdateScheduler {
    rebuild: CoalescingChannel,
    recompute: FrameGate,
}

impl UpdateScheduler {
    /// Create a scheduler with the given rebuild debounce.
    #[must_use]
    pub fn new(rebuild_debounce: Duration) -> Self {
        Self {
            rebuild: CoalescingChannel::new(rebuild_debounce),
            recompute: FrameGate::new(),
        }
    }

    /// Document mutated (or window resized) at `now`.
    pub fn signal_mutation(&mut self, now: Duration) -> bool {
        self.rebuild.signal(now)
    }

    /// The bound viewport scrolled.
    pub fn signal_scroll(&mut self) -> bool {
        self.recompute.signal()
    }

    /// Consume a due rebuild.
    pub fn take_due_rebuild(&mut self, now: Duration) -> bool {
        self.rebuild.take_due(now)
    }

    /// Consume a frame-gated recompute.
    pub fn take_frame_recompute(&mut self) -> bool {
        self.recompute.take_frame()
    }

    /// Drop a recompute waiting for the next frame.
    pub fn cancel_recompute(&mut self) {
        self.recompute.cancel();
    }

    /// Whether the host should deliver an animation frame.
    #[must_use]
    pub const fn wants_frame(&self) -> bool {
        self.recompute.is_pending()
    }

    /// Earliest time the host should call back for timed work.
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Duration> {
        self.rebuild.deadline()
    }

    /// The rebuild channel.
    #[must_use]
    pub const fn rebuild(&self) -> &CoalescingChannel {
        &self.rebuild
    }

    /// The recompute channel.
    #[must_use]
    pub const fn recompute(&self) -> &FrameGate {
        &self.recompute
    }

    /// Counters for both channels.
    #[must_use]
    pub const fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            rebuild: self.rebuild.stats(),
            recompute: self.recompute.stats(),
        }
    }
}
