#![forbid(unsafe_code)]

//! Live positional search over anchors.
//!
//! Maps a vertical offset to the anchor whose top edge is closest to it.
//! Anchor offsets are measured through [`AnchorGeometry`] on every probe;
//! nothing is cached between calls, so the answer stays correct while the
//! transcript reflows. A lookup costs O(log n) measurements.
//!
//! # Example
//!
//! ```
//! use navrail_core::layout::AnchorGeometry;
//! use navrail_core::position_index::{closest_index, current_index};
//!
//! struct Table { tops: Vec<f64>, scroll: f64, height: f64 }
//!
//! impl AnchorGeometry for Table {
//!     type Anchor = usize;
//!     fn top_offset_of(&self, a: &usize) -> f64 { self.tops[*a] }
//!     fn viewport_height(&self) -> f64 { self.height }
//!     fn viewport_scroll_offset(&self) -> f64 { self.scroll }
//! }
//!
//! let table = Table { tops: vec![0.0, 500.0, 1200.0, 2000.0], scroll: 600.0, height: 800.0 };
//! let anchors = [0, 1, 2, 3];
//! assert_eq!(closest_index(&table, &anchors, 800.0), Some(1));
//! assert_eq!(current_index(&table, &anchors, 0.25), Some(1));
//! ```

use crate::layout::AnchorGeometry;

/// Fraction of the viewport, from its top, that marks the "current" entry.
pub const DEFAULT_VIEWPORT_FRACTION: f64 = 0.25;

/// The probe offset for a viewport: scroll offset plus a rounded fraction
/// of its height.
#[inline]
#[must_use]
pub fn target_offset(scroll_offset: f64, viewport_height: f64, fraction: f64) -> f64 {
    scroll_offset + (viewport_height * fraction).round()
}

/// Index of the anchor whose measured top is nearest to `y`.
///
/// Binary-searches for the first anchor with top `>= y`, then compares it
/// with its predecessor. Equal distances resolve to the earlier anchor.
/// Returns `None` only for an empty slice.
pub fn closest_index<G>(geometry: &G, anchors: &[G::Anchor], y: f64) -> Option<usize>
where
    G: AnchorGeometry + ?Sized,
{
    let n = anchors.len();
    if n == 0 {
        return None;
    }

    let mut lo = 0;
    let mut hi = n - 1;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if geometry.top_offset_of(&anchors[mid]) < y {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    if lo == 0 {
        return Some(0);
    }
    let prev = lo - 1;
    let before = (geometry.top_offset_of(&anchors[prev]) - y).abs();
    let at = (geometry.top_offset_of(&anchors[lo]) - y).abs();
    Some(if before <= at { prev } else { lo })
}

/// Index of the "current" anchor for the geometry's viewport.
pub fn current_index<G>(geometry: &G, anchors: &[G::Anchor], fraction: f64) -> Option<usize>
where
    G: AnchorGeometry + ?Sized,
{
    if anchors.is_empty() {
        return None;
    }
    let y = target_offset(
        geometry.viewport_scroll_offset(),
        geometry.viewport_height(),
        fraction,
    );
    closest_index(geometry, anchors, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Table {
        tops: Vec<f64>,
        scroll: f64,
        height: f64,
        probes: Cell<usize>,
    }

    impl Table {
        fn new(tops: &[f64]) -> Self {
            Self {
                tops: tops.to_vec(),
                scroll: 0.0,
                height: 800.0,
                probes: Cell::new(0),
            }
        }

        fn anchors(&self) -> Vec<usize> {
            (0..self.tops.len()).collect()
        }
    }

    impl AnchorGeometry for Table {
        type Anchor = usize;

        fn top_offset_of(&self, anchor: &usize) -> f64 {
            self.probes.set(self.probes.get() + 1);
            self.tops[*anchor]
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn viewport_scroll_offset(&self) -> f64 {
            self.scroll
        }
    }

    const TOPS: [f64; 4] = [0.0, 500.0, 1200.0, 2000.0];

    #[test]
    fn empty_list_has_no_index() {
        let t = Table::new(&[]);
        assert_eq!(closest_index(&t, &[], 100.0), None);
        assert_eq!(current_index(&t, &[], 0.25), None);
    }

    #[test]
    fn mid_scroll_scenario_picks_nearer_previous() {
        let mut t = Table::new(&TOPS);
        t.scroll = 600.0;
        assert_eq!(current_index(&t, &t.anchors(), 0.25), Some(1));
    }

    #[test]
    fn top_of_document_scenario() {
        let t = Table::new(&TOPS);
        assert_eq!(current_index(&t, &t.anchors(), 0.25), Some(0));
    }

    #[test]
    fn tie_goes_to_earlier_entry() {
        let t = Table::new(&[0.0, 400.0]);
        assert_eq!(closest_index(&t, &t.anchors(), 200.0), Some(0));
    }

    #[test]
    fn clamps_at_both_ends() {
        let t = Table::new(&TOPS);
        assert_eq!(closest_index(&t, &t.anchors(), -5000.0), Some(0));
        assert_eq!(closest_index(&t, &t.anchors(), 99_999.0), Some(3));
    }

    #[test]
    fn exact_hit_returns_that_entry() {
        let t = Table::new(&TOPS);
        assert_eq!(closest_index(&t, &t.anchors(), 1200.0), Some(2));
    }

    #[test]
    fn single_entry_is_always_current() {
        let t = Table::new(&[350.0]);
        assert_eq!(closest_index(&t, &t.anchors(), 0.0), Some(0));
        assert_eq!(closest_index(&t, &t.anchors(), 10_000.0), Some(0));
    }

    #[test]
    fn target_rounds_the_viewport_fraction() {
        assert_eq!(target_offset(100.0, 801.0, 0.25), 300.0);
        assert_eq!(target_offset(0.0, 802.0, 0.25), 201.0);
    }

    #[test]
    fn probes_are_logarithmic() {
        let tops: Vec<f64> = (0..1024).map(|i| f64::from(i) * 100.0).collect();
        let t = Table::new(&tops);
        closest_index(&t, &t.anchors(), 51_234.0);
        assert!(t.probes.get() <= 12, "probes = {}", t.probes.get());
    }

    #[test]
    fn remeasures_after_reflow() {
        let mut t = Table::new(&TOPS);
        let anchors = t.anchors();
        assert_eq!(closest_index(&t, &anchors, 1300.0), Some(2));
        t.tops = vec![0.0, 900.0, 1700.0, 2500.0];
        assert_eq!(closest_index(&t, &anchors, 1300.0), Some(1));
    }
}
