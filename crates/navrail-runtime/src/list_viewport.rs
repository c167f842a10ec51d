#![forbid(unsafe_code)]

//! Side-list scroll state: keep-visible math and manual-scroll detection.
//!
//! The navigation list scrolls independently of the transcript. Two things
//! must hold at once:
//!
//! - the active row is kept inside the list's visible band, and
//! - a user browsing the list by hand is not yanked back to the active row.
//!
//! [`keep_visible`] computes the minimal list scroll that brings a row
//! inside the band. [`ManualScrollHint`] remembers when the user last
//! scrolled the list, ignoring scroll events caused by our own
//! keep-visible adjustments.

use core::time::Duration;

/// Scroll measurements of the side list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListMetrics {
    /// Current list scroll offset.
    pub scroll_top: f64,
    /// Visible list height.
    pub client_height: f64,
    /// Total list content height.
    pub scroll_height: f64,
}

impl ListMetrics {
    /// Whether the list has content beyond its visible band.
    #[inline]
    #[must_use]
    pub fn can_scroll(&self) -> bool {
        self.scroll_height > self.client_height + 1.0
    }

    /// Whether the list is scrolled to (within a pixel of) the top.
    #[must_use]
    pub fn at_top(&self) -> bool {
        self.scroll_top <= 1.0
    }

    /// Whether the list is scrolled to (within a pixel of) the bottom.
    #[must_use]
    pub fn at_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - 1.0
    }
}

/// Fade masks at the list edges, hinting at rows scrolled out of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeMasks {
    /// Rows are hidden above the visible band.
    pub top: bool,
    /// Rows are hidden below the visible band.
    pub bottom: bool,
}

impl EdgeMasks {
    /// Masks for a list in `metrics`. A collapsed panel or a list that fits
    /// shows none.
    #[must_use]
    pub fn for_list(metrics: ListMetrics, open: bool) -> Self {
        if !open || !metrics.can_scroll() {
            return Self::default();
        }
        Self {
            top: !metrics.at_top(),
            bottom: !metrics.at_bottom(),
        }
    }
}

/// Vertical extent of one list row, relative to the list content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemSpan {
    /// Row top.
    pub top: f64,
    /// Row height.
    pub height: f64,
}

impl ItemSpan {
    /// Row bottom.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// New list scroll offset that keeps `item` at least `pad` px inside the
/// visible band, or `None` when it already is.
#[must_use]
pub fn keep_visible(metrics: ListMetrics, item: ItemSpan, pad: f64) -> Option<f64> {
    let view_top = metrics.scroll_top;
    let view_bottom = view_top + metrics.client_height;

    if item.top < view_top + pad {
        Some((item.top - pad).max(0.0))
    } else if item.bottom() > view_bottom - pad {
        Some((item.bottom() - metrics.client_height + pad).max(0.0))
    } else {
        None
    }
}

/// Tracks user-initiated list scrolling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualScrollHint {
    last_user_scroll: Option<Duration>,
    programmatic: bool,
}

impl ManualScrollHint {
    /// Create a hint with no recorded user scroll.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_user_scroll: None,
            programmatic: false,
        }
    }

    /// A list scroll event arrived at `now`.
    ///
    /// Returns `true` if it was attributed to the user.
    pub fn record_list_scroll(&mut self, now: Duration) -> bool {
        if self.programmatic {
            return false;
        }
        self.last_user_scroll = Some(now);
        true
    }

    /// We are about to scroll the list ourselves.
    pub fn begin_programmatic(&mut self) {
        self.programmatic = true;
    }

    /// The frame after a programmatic scroll has been rendered.
    pub fn end_programmatic(&mut self) {
        self.programmatic = false;
    }

    /// Whether a programmatic scroll awaits its frame.
    #[must_use]
    pub const fn programmatic_in_flight(&self) -> bool {
        self.programmatic
    }

    /// Timestamp of the last user list scroll.
    #[must_use]
    pub const fn last_user_scroll(&self) -> Option<Duration> {
        self.last_user_scroll
    }

    /// Whether the user scrolled the list within `window` before `now`.
    #[must_use]
    pub fn is_user_browsing(&self, now: Duration, window: Duration) -> bool {
        self.last_user_scroll
            .is_some_and(|at| now.saturating_sub(at) <= window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(scroll_top: f64) -> ListMetrics {
        ListMetrics {
            scroll_top,
            client_height: 200.0,
            scroll_height: 900.0,
        }
    }

    fn row(top: f64) -> ItemSpan {
        ItemSpan { top, height: 20.0 }
    }

    #[test]
    fn scrollability_needs_more_than_a_pixel() {
        let mut m = list(0.0);
        assert!(m.can_scroll());
        m.scroll_height = 201.0;
        assert!(!m.can_scroll());
        m.scroll_height = 201.5;
        assert!(m.can_scroll());
    }

    #[test]
    fn edges() {
        assert!(list(0.5).at_top());
        assert!(!list(2.0).at_top());
        assert!(list(699.5).at_bottom());
        assert!(!list(600.0).at_bottom());
    }

    #[test]
    fn masks_follow_scroll_position_when_open() {
        assert_eq!(
            EdgeMasks::for_list(list(0.0), true),
            EdgeMasks { top: false, bottom: true }
        );
        assert_eq!(
            EdgeMasks::for_list(list(300.0), true),
            EdgeMasks { top: true, bottom: true }
        );
        assert_eq!(
            EdgeMasks::for_list(list(700.0), true),
            EdgeMasks { top: true, bottom: false }
        );
    }

    #[test]
    fn masks_off_when_collapsed_or_short() {
        assert_eq!(EdgeMasks::for_list(list(300.0), false), EdgeMasks::default());
        let mut short = list(0.0);
        short.scroll_height = 150.0;
        assert_eq!(EdgeMasks::for_list(short, true), EdgeMasks::default());
    }

    #[test]
    fn row_inside_band_needs_nothing() {
        assert_eq!(keep_visible(list(100.0), row(150.0), 14.0), None);
        assert_eq!(keep_visible(list(100.0), row(114.0), 14.0), None);
        assert_eq!(keep_visible(list(100.0), row(266.0), 14.0), None);
    }

    #[test]
    fn row_above_band_scrolls_up_with_padding() {
        assert_eq!(keep_visible(list(100.0), row(90.0), 14.0), Some(76.0));
        assert_eq!(keep_visible(list(100.0), row(5.0), 14.0), Some(0.0));
    }

    #[test]
    fn row_below_band_scrolls_down_with_padding() {
        // bottom = 400, band bottom = 300 - 14
        assert_eq!(keep_visible(list(100.0), row(380.0), 14.0), Some(214.0));
    }

    #[test]
    fn programmatic_scrolls_are_not_user_scrolls() {
        let mut hint = ManualScrollHint::new();
        hint.begin_programmatic();
        assert!(hint.programmatic_in_flight());
        assert!(!hint.record_list_scroll(Duration::from_millis(10)));
        assert_eq!(hint.last_user_scroll(), None);
        hint.end_programmatic();
        assert!(hint.record_list_scroll(Duration::from_millis(20)));
        assert_eq!(hint.last_user_scroll(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn browsing_window_is_inclusive() {
        let mut hint = ManualScrollHint::new();
        let window = Duration::from_millis(350);
        assert!(!hint.is_user_browsing(Duration::from_millis(5), window));
        hint.record_list_scroll(Duration::from_millis(1000));
        assert!(hint.is_user_browsing(Duration::from_millis(1350), window));
        assert!(!hint.is_user_browsing(Duration::from_millis(1351), window));
    }
}
