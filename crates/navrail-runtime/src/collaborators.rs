#![forbid(unsafe_code)]

//! Output-side collaborator traits.
//!
//! The navigator decides *what* should happen; these traits are how the host
//! makes it happen. A browser host implements them over the DOM, tests over
//! recording fakes (see `navrail-harness`).

use navrail_core::geometry::{ScrollTarget, WindowMetrics};
use navrail_core::label::NavEntry;

use crate::list_viewport::{EdgeMasks, ItemSpan, ListMetrics};
use crate::nav_config::PanelPolicyConfig;

/// A request to bring an anchor near the top of its scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest<N> {
    /// Container to scroll.
    pub target: ScrollTarget<N>,
    /// Anchor being navigated to.
    pub anchor: N,
    /// Desired scroll offset: anchor offset minus the lead-in, floored at 0.
    pub top: f64,
    /// Gap kept above the anchor.
    pub lead_in: f64,
}

/// Drives the main scroll container.
pub trait ViewportDriver<N> {
    /// Move the scroll listener from `previous` to `next` in one step.
    ///
    /// `previous` is `None` on the first binding. The host must detach the
    /// old listener before attaching the new one.
    fn rebind_scroll_listener(&mut self, previous: Option<&ScrollTarget<N>>, next: &ScrollTarget<N>);

    /// Smoothly scroll a container to the requested offset.
    fn scroll_to(&mut self, request: ScrollRequest<N>);
}

/// How the active marker is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Panel is open: highlighted row text and mark.
    Expanded,
    /// Panel is collapsed: accent-colored tick only.
    Collapsed,
}

impl MarkerStyle {
    /// Style for the given open state.
    #[must_use]
    pub const fn for_open(open: bool) -> Self {
        if open { Self::Expanded } else { Self::Collapsed }
    }
}

/// Panel placement derived from the window size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelLayout {
    /// Maximum list height (px).
    pub list_max_height: f64,
    /// Distance between the panel and the window's right edge (px).
    pub right_inset: f64,
}

impl PanelLayout {
    /// Compute placement for `window`.
    #[must_use]
    pub fn compute(policy: &PanelPolicyConfig, window: &WindowMetrics) -> Self {
        let list_max_height = policy.list_max_height_px.min(
            policy
                .list_min_height_px
                .max(window.inner_height - policy.list_height_margin_px),
        );
        let gutter = window.scrollbar_width().max(policy.min_gutter_px);
        Self {
            list_max_height: list_max_height.round(),
            right_inset: policy.base_right_inset_px + gutter,
        }
    }
}

/// Renders navigation state and reports list geometry.
pub trait NavPresenter {
    /// Replace every list row.
    fn set_entries(&mut self, entries: &[NavEntry]);

    /// Show or hide the whole panel (hidden when there are no entries).
    fn set_panel_visible(&mut self, visible: bool);

    /// Expand or collapse the panel.
    fn set_open(&mut self, open: bool);

    /// Highlight `index`, or clear the highlight.
    fn mark_active(&mut self, index: Option<usize>, style: MarkerStyle);

    /// Current list scroll measurements.
    fn list_metrics(&self) -> ListMetrics;

    /// Extent of row `index`, if the row exists.
    fn item_span(&self, index: usize) -> Option<ItemSpan>;

    /// Scroll the list.
    fn set_list_scroll_top(&mut self, top: f64);

    /// Whether row `index` renders its label clipped.
    fn label_overflows(&self, _index: usize) -> bool {
        false
    }

    /// Show the full-text tooltip next to row `index`.
    fn show_tooltip(&mut self, index: usize, text: &str);

    /// Hide the tooltip.
    fn hide_tooltip(&mut self);

    /// Apply a new panel placement.
    fn apply_panel_layout(&mut self, _layout: PanelLayout) {}

    /// Show or hide the fades at the list edges.
    fn set_edge_masks(&mut self, _masks: EdgeMasks) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_height_is_clamped() {
        let policy = PanelPolicyConfig::default();
        let tall = PanelLayout::compute(&policy, &WindowMetrics::new(1280.0, 1000.0));
        assert_eq!(tall.list_max_height, 250.0);
        let mid = PanelLayout::compute(&policy, &WindowMetrics::new(1280.0, 260.0));
        assert_eq!(mid.list_max_height, 180.0);
        let tiny = PanelLayout::compute(&policy, &WindowMetrics::new(1280.0, 100.0));
        assert_eq!(tiny.list_max_height, 120.0);
    }

    #[test]
    fn right_inset_reserves_scrollbar_or_gutter() {
        let policy = PanelPolicyConfig::default();
        let overlay = PanelLayout::compute(&policy, &WindowMetrics::new(1280.0, 900.0));
        assert_eq!(overlay.right_inset, 30.0);

        let mut classic = WindowMetrics::new(1280.0, 900.0);
        classic.client_width = 1263.0;
        assert_eq!(PanelLayout::compute(&policy, &classic).right_inset, 33.0);
    }

    #[test]
    fn marker_style_follows_open_state() {
        assert_eq!(MarkerStyle::for_open(true), MarkerStyle::Expanded);
        assert_eq!(MarkerStyle::for_open(false), MarkerStyle::Collapsed);
    }
}
