#![forbid(unsafe_code)]

//! Delayed full-text tooltip for list rows.
//!
//! Hovering a row for long enough reveals the untruncated entry text. The
//! delay is a stored deadline checked on each timer tick; a newer hover
//! simply replaces it.

use core::time::Duration;

/// Tooltip state: at most one pending and one shown entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTip {
    pending: Option<(usize, Duration)>,
    shown: Option<usize>,
}

impl HoverTip {
    /// Create an idle tooltip.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            shown: None,
        }
    }

    /// Show the tooltip for `index` once `delay` has elapsed from `now`.
    pub fn schedule(&mut self, index: usize, now: Duration, delay: Duration) {
        self.pending = Some((index, now.saturating_add(delay)));
    }

    /// Take the pending entry if its deadline has passed.
    pub fn take_due(&mut self, now: Duration) -> Option<usize> {
        match self.pending {
            Some((index, deadline)) if now >= deadline => {
                self.pending = None;
                Some(index)
            }
            _ => None,
        }
    }

    /// Record that the tooltip for `index` is visible.
    pub fn mark_shown(&mut self, index: usize) {
        self.shown = Some(index);
    }

    /// Forget pending and shown state.
    ///
    /// Returns `true` if there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let had = self.pending.is_some() || self.shown.is_some();
        self.pending = None;
        self.shown = None;
        had
    }

    /// When the pending tooltip becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// The entry whose tooltip is visible.
    #[must_use]
    pub const fn shown(&self) -> Option<usize> {
        self.shown
    }
}
