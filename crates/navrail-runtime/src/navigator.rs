#![forbid(unsafe_code)]

//! Active-entry synchronization.
//!
//! [`Navigator`] is the single owner of navigation state: the anchor list,
//! the bound scroll container, the active index, and the side-list scroll
//! hint. Every host signal is forwarded to one of its `on_*` methods and the
//! navigator decides what changes.
//!
//! # Authority
//!
//! Two sources move the active index:
//!
//! - **Scroll-driven**: after the viewport scrolls, the anchor nearest a
//!   quarter of the way down the viewport becomes active. If the user has
//!   scrolled the side list by hand within the suppression window (and the
//!   panel is open with a scrollable list), the marker still moves but the
//!   list is not scrolled to follow it.
//! - **User-driven**: a click or wheel jump sets the index directly, drives
//!   the viewport, and always keeps the row visible. It also drops any
//!   scroll-driven recompute still waiting for its frame, so explicit
//!   navigation wins. While a settled wheel jump is still waiting to drive
//!   the viewport, scroll-driven recomputes (including the one inside a
//!   rebuild) keep the jumped-to entry.
//!
//! # Scheduling
//!
//! Mutation and resize signals go through the debounced rebuild channel;
//! scroll signals through the frame-gated recompute channel. The host calls
//! [`Navigator::on_timer`] at [`Navigator::next_deadline`] and
//! [`Navigator::on_animation_frame`] while [`Navigator::wants_frame`] holds.
//! A rebuild recomputes the active index inline, so a recompute queued
//! before it never reads stale indices.

use core::time::Duration;

use navrail_core::clock::MonotonicClock;
use navrail_core::label::NavEntry;
use navrail_core::layout::DocumentProvider;
use navrail_core::position_index::current_index;
use navrail_core::scroll_container::{ResolverConfig, ScrollContext};

use crate::collaborators::{
    MarkerStyle, NavPresenter, PanelLayout, ScrollRequest, ViewportDriver,
};
use crate::hover_tip::HoverTip;
use crate::list_viewport::{EdgeMasks, ManualScrollHint, keep_visible};
use crate::nav_config::{JumpViewportPolicy, NavConfig};
use crate::update_scheduler::UpdateScheduler;

/// Whether a wheel gesture over the panel was used for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Used as a relative jump; the host should prevent the default scroll.
    Consumed,
    /// Not ours; let the list (or page) scroll natively.
    PassThrough,
}

/// What triggered a user-driven jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JumpSource {
    Click,
    Wheel,
}

/// A viewport drive deferred under [`JumpViewportPolicy::Settle`].
#[derive(Debug, Clone, Copy)]
struct SettlingJump<N> {
    anchor: N,
    deadline: Duration,
}

/// The navigation controller for one document.
pub struct Navigator<D, V, P, C>
where
    D: DocumentProvider,
{
    config: NavConfig,
    resolver: ResolverConfig,
    document: D,
    driver: V,
    presenter: P,
    clock: C,
    scheduler: UpdateScheduler,
    anchors: Vec<D::Node>,
    entries: Vec<NavEntry>,
    scroll: Option<ScrollContext<D::Node>>,
    active: Option<usize>,
    hovered: bool,
    hint: ManualScrollHint,
    tip: HoverTip,
    settling: Option<SettlingJump<D::Node>>,
    edges: EdgeMasks,
}

impl<D, V, P, C> Navigator<D, V, P, C>
where
    D: DocumentProvider,
    V: ViewportDriver<D::Node>,
    P: NavPresenter,
    C: MonotonicClock,
{
    /// Create a navigator. Nothing is measured until [`boot`](Self::boot).
    pub fn new(config: NavConfig, document: D, driver: V, presenter: P, clock: C) -> Self {
        let resolver = config.to_resolver_config();
        let scheduler = UpdateScheduler::new(config.scheduler.rebuild_debounce());
        Self {
            config,
            resolver,
            document,
            driver,
            presenter,
            clock,
            scheduler,
            anchors: Vec::new(),
            entries: Vec::new(),
            scroll: None,
            active: None,
            hovered: false,
            hint: ManualScrollHint::new(),
            tip: HoverTip::new(),
            settling: None,
            edges: EdgeMasks::default(),
        }
    }

    // ------------------------------------------------------------------
    // Host signals
    // ------------------------------------------------------------------

    /// Apply the initial layout and build the list once.
    pub fn boot(&mut self) {
        self.apply_panel_layout();
        self.rebuild();
    }

    /// The document mutated.
    pub fn on_mutation(&mut self) {
        let now = self.clock.now_mono();
        if !self.scheduler.signal_mutation(now) {
            tracing::trace!(message = "nav.mutation.coalesced");
        }
    }

    /// The window resized. Re-places the panel and schedules a rebuild.
    pub fn on_resize(&mut self) {
        self.apply_panel_layout();
        self.on_mutation();
    }

    /// The bound scroll container scrolled.
    pub fn on_scroll(&mut self) {
        if !self.scheduler.signal_scroll() {
            tracing::trace!(message = "nav.scroll.coalesced");
        }
    }

    /// An animation frame is being rendered.
    pub fn on_animation_frame(&mut self) {
        self.hint.end_programmatic();
        if self.scheduler.take_frame_recompute() {
            self.update_active_by_scroll(false);
        }
    }

    /// A host timer fired; runs whatever timed work is due.
    pub fn on_timer(&mut self) {
        let now = self.clock.now_mono();

        if self.scheduler.take_due_rebuild(now) {
            self.rebuild();
        }

        if let Some(index) = self.tip.take_due(now) {
            self.show_tooltip(index);
        }

        if let Some(settling) = self.settling
            && now >= settling.deadline
        {
            self.settling = None;
            self.scroll_to_anchor(settling.anchor);
        }
    }

    /// The user scrolled the side list (or we did; see [`ManualScrollHint`]).
    pub fn on_list_scrolled(&mut self) {
        let now = self.clock.now_mono();
        if self.hint.record_list_scroll(now) {
            tracing::trace!(message = "nav.list.user_scroll");
        }
        self.refresh_edge_masks();
    }

    /// The pointer entered or left the panel.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.presenter.set_open(hovered);

        if self.active.is_none() && !self.anchors.is_empty() {
            self.ensure_scroll_binding(false);
            self.active = self.compute_scroll_index();
        }
        if let Some(index) = self.active {
            self.set_active(index, true);
        }

        if !hovered {
            self.clear_tooltip();
        }
        self.refresh_edge_masks();
    }

    /// The pointer entered row `index`.
    pub fn on_item_enter(&mut self, index: usize) {
        self.clear_tooltip();
        if !self.hovered {
            return;
        }
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        if !entry.wants_tooltip(self.presenter.label_overflows(index)) {
            return;
        }
        let now = self.clock.now_mono();
        self.tip
            .schedule(index, now, self.config.list.tooltip_delay());
    }

    /// The pointer left a row.
    pub fn on_item_leave(&mut self) {
        self.clear_tooltip();
    }

    /// A row was clicked.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.anchors.len() {
            return;
        }
        self.navigate(index, JumpSource::Click);
    }

    /// Move `direction` entries from the active one, clamped to the list.
    pub fn jump_relative(&mut self, direction: i32) {
        let n = self.anchors.len();
        if n == 0 {
            return;
        }
        let current = self.active.unwrap_or(0);
        let next = if direction >= 0 {
            current.saturating_add(direction.unsigned_abs() as usize)
        } else {
            current.saturating_sub(direction.unsigned_abs() as usize)
        }
        .min(n - 1);
        self.navigate(next, JumpSource::Wheel);
    }

    /// A wheel gesture over the panel.
    ///
    /// Passes through when there is nothing to navigate, or when the panel
    /// is open and its list can scroll on its own.
    pub fn on_panel_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if self.anchors.is_empty() {
            return WheelOutcome::PassThrough;
        }
        if self.hovered && self.presenter.list_metrics().can_scroll() {
            return WheelOutcome::PassThrough;
        }
        if delta_y > 0.0 {
            self.jump_relative(1);
        } else if delta_y < 0.0 {
            self.jump_relative(-1);
        }
        WheelOutcome::Consumed
    }

    // ------------------------------------------------------------------
    // Synchronization
    // ------------------------------------------------------------------

    /// Replace the anchor list from the document and resynchronize.
    pub fn rebuild(&mut self) {
        let title_max = self.config.list.title_max_chars;
        self.anchors = self.document.query_anchors();
        self.entries = self
            .anchors
            .iter()
            .enumerate()
            .map(|(i, &node)| NavEntry::from_text(i, &self.document.anchor_text(node), title_max))
            .collect();

        tracing::debug!(message = "nav.rebuild", anchors = self.anchors.len());

        self.presenter.set_panel_visible(!self.anchors.is_empty());
        self.clear_tooltip();
        if self.active.is_some_and(|i| i >= self.anchors.len()) {
            self.active = None;
        }
        self.ensure_scroll_binding(true);
        self.presenter.set_entries(&self.entries);

        if self.anchors.is_empty() {
            self.active = None;
            self.settling = None;
            self.presenter
                .mark_active(None, MarkerStyle::for_open(self.hovered));
            self.refresh_edge_masks();
            return;
        }

        self.presenter.set_open(self.hovered);
        self.update_active_by_scroll(true);
        self.refresh_edge_masks();
    }

    /// Recompute the active index from the viewport position.
    ///
    /// With `force`, the result is applied even when unchanged. A pending
    /// settled wheel jump takes precedence over the viewport position.
    pub fn update_active_by_scroll(&mut self, force: bool) {
        if self.anchors.is_empty() {
            return;
        }
        if let Some(settling) = self.settling {
            // The viewport has not caught up with a wheel jump yet.
            match self.anchors.iter().position(|&a| a == settling.anchor) {
                Some(index) => {
                    if force || self.active != Some(index) {
                        self.set_active(index, true);
                    }
                    return;
                }
                None => self.settling = None,
            }
        }
        self.ensure_scroll_binding(false);
        let Some(index) = self.compute_scroll_index() else {
            return;
        };
        if !force && self.active == Some(index) {
            return;
        }

        let now = self.clock.now_mono();
        let browsing = self.hovered
            && self.presenter.list_metrics().can_scroll()
            && self
                .hint
                .is_user_browsing(now, self.config.sync.manual_scroll_window());
        if browsing {
            tracing::trace!(message = "nav.keep_visible.suppressed", index);
        }
        self.set_active(index, !browsing);
    }

    fn compute_scroll_index(&self) -> Option<usize> {
        let context = self.scroll.as_ref()?;
        let geometry = context.measure(&self.document);
        current_index(
            &geometry,
            &self.anchors,
            self.config.sync.viewport_fraction,
        )
    }

    fn set_active(&mut self, index: usize, ensure_visible: bool) {
        let previous = self.active.replace(index);
        self.presenter
            .mark_active(Some(index), MarkerStyle::for_open(self.hovered));
        if previous != Some(index) {
            tracing::debug!(message = "nav.active", index, previous = ?previous);
        }

        let Some(span) = self.presenter.item_span(index) else {
            return;
        };
        let metrics = self.presenter.list_metrics();
        if !ensure_visible || !metrics.can_scroll() {
            return;
        }
        if let Some(top) = keep_visible(metrics, span, self.config.list.keep_visible_padding_px)
            && (top - metrics.scroll_top).abs() >= 0.5
        {
            self.hint.begin_programmatic();
            self.presenter.set_list_scroll_top(top);
            self.refresh_edge_masks();
        }
    }

    fn navigate(&mut self, index: usize, source: JumpSource) {
        self.scheduler.cancel_recompute();
        self.set_active(index, true);

        let anchor = self.anchors[index];
        tracing::debug!(message = "nav.jump", index, source = ?source);

        let settle = source == JumpSource::Wheel
            && self.config.sync.jump_viewport == JumpViewportPolicy::Settle;
        if settle {
            let deadline = self
                .clock
                .now_mono()
                .saturating_add(self.config.sync.jump_settle());
            self.settling = Some(SettlingJump { anchor, deadline });
        } else {
            self.settling = None;
            self.scroll_to_anchor(anchor);
        }
    }

    fn scroll_to_anchor(&mut self, anchor: D::Node) {
        if !self.document.is_connected(anchor) {
            tracing::trace!(message = "nav.scroll_to.detached");
            return;
        }
        self.ensure_scroll_binding(false);
        let Some(context) = self.scroll.as_ref() else {
            return;
        };
        let lead_in = self.config.sync.lead_in_px;
        let top = (context.anchor_offset(&self.document, anchor) - lead_in).max(0.0);
        let request = ScrollRequest {
            target: *context.target(),
            anchor,
            top,
            lead_in,
        };
        self.driver.scroll_to(request);
    }

    /// Re-resolve the scroll container when the seed anchor changed (or
    /// always, with `force`), and move the scroll listener if the target did.
    fn ensure_scroll_binding(&mut self, force: bool) {
        let Some(last) = self.anchors.len().checked_sub(1) else {
            return;
        };
        let seed = self.anchors[self.active.unwrap_or(0).min(last)];
        if !force
            && self
                .scroll
                .as_ref()
                .is_some_and(|context| context.seed() == Some(seed))
        {
            return;
        }

        let next = ScrollContext::resolve(&self.document, seed, &self.resolver);
        let previous = self.scroll.as_ref().map(|context| *context.target());
        if previous.as_ref() != Some(next.target()) {
            tracing::debug!(
                message = "nav.rebind",
                window = next.target().is_window(),
                first = previous.is_none()
            );
            self.driver
                .rebind_scroll_listener(previous.as_ref(), next.target());
        }
        self.scroll = Some(next);
    }

    fn show_tooltip(&mut self, index: usize) {
        if !self.hovered {
            return;
        }
        let Some(&anchor) = self.anchors.get(index) else {
            return;
        };
        if !self.document.is_connected(anchor) {
            return;
        }
        if let Some(entry) = self.entries.get(index) {
            self.presenter.show_tooltip(index, &entry.full_text);
            self.tip.mark_shown(index);
        }
    }

    fn clear_tooltip(&mut self) {
        if self.tip.clear() {
            self.presenter.hide_tooltip();
        }
    }

    fn apply_panel_layout(&mut self) {
        let layout = PanelLayout::compute(&self.config.panel, &self.document.window());
        self.presenter.apply_panel_layout(layout);
        self.refresh_edge_masks();
    }

    fn refresh_edge_masks(&mut self) {
        let masks = EdgeMasks::for_list(self.presenter.list_metrics(), self.hovered);
        if masks != self.edges {
            self.edges = masks;
            self.presenter.set_edge_masks(masks);
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Earliest time [`on_timer`](Self::on_timer) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.scheduler.next_deadline(),
            self.tip.deadline(),
            self.settling.map(|s| s.deadline),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Whether [`on_animation_frame`](Self::on_animation_frame) has work.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.scheduler.wants_frame() || self.hint.programmatic_in_flight()
    }

    /// The active entry, or `None` when the list is empty.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Current anchors in document order.
    #[must_use]
    pub fn anchors(&self) -> &[D::Node] {
        &self.anchors
    }

    /// Current list entries.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// The bound scroll container, once any anchors have been seen.
    #[must_use]
    pub fn scroll_context(&self) -> Option<&ScrollContext<D::Node>> {
        self.scroll.as_ref()
    }

    /// Whether the panel is open.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The update scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &UpdateScheduler {
        &self.scheduler
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The document provider.
    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access to the document provider.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// The viewport driver.
    #[must_use]
    pub fn driver(&self) -> &V {
        &self.driver
    }

    /// Mutable access to the viewport driver.
    pub fn driver_mut(&mut self) -> &mut V {
        &mut self.driver
    }

    /// The presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Mutable access to the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl<D, V, P, C> std::fmt::Debug for Navigator<D, V, P, C>
where
    D: DocumentProvider,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("anchors", &self.anchors.len())
            .field("active", &self.active)
            .field("hovered", &self.hovered)
            .field("scroll", &self.scroll)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_viewport::{ItemSpan, ListMetrics};
    use navrail_core::clock::DeterministicClock;
    use navrail_core::geometry::{BoxMetrics, OverflowY, ScrollTarget, WindowMetrics};
    use navrail_core::layout::LayoutTree;

    /// Window-scrolled document: anchor `i` sits at `tops[i]`.
    #[derive(Debug, Default)]
    struct Page {
        tops: Vec<f64>,
        scroll_y: f64,
        detached: Vec<u32>,
    }

    impl LayoutTree for Page {
        type Node = u32;

        fn parent(&self, _node: u32) -> Option<u32> {
            None
        }

        fn overflow_y(&self, _node: u32) -> OverflowY {
            OverflowY::Visible
        }

        fn box_metrics(&self, _node: u32) -> BoxMetrics {
            BoxMetrics::default()
        }

        fn client_top(&self, node: u32) -> f64 {
            self.tops[node as usize] - self.scroll_y
        }

        fn window(&self) -> WindowMetrics {
            WindowMetrics::new(1280.0, 800.0).with_scroll_y(self.scroll_y)
        }

        fn is_connected(&self, node: u32) -> bool {
            (node as usize) < self.tops.len() && !self.detached.contains(&node)
        }
    }

    impl DocumentProvider for Page {
        fn query_anchors(&self) -> Vec<u32> {
            (0..self.tops.len() as u32).collect()
        }

        fn anchor_text(&self, node: u32) -> String {
            format!("turn {node}")
        }
    }

    #[derive(Debug, Default)]
    struct Driver {
        binds: Vec<(Option<ScrollTarget<u32>>, ScrollTarget<u32>)>,
        scrolls: Vec<ScrollRequest<u32>>,
    }

    impl ViewportDriver<u32> for Driver {
        fn rebind_scroll_listener(
            &mut self,
            previous: Option<&ScrollTarget<u32>>,
            next: &ScrollTarget<u32>,
        ) {
            self.binds.push((previous.copied(), *next));
        }

        fn scroll_to(&mut self, request: ScrollRequest<u32>) {
            self.scrolls.push(request);
        }
    }

    /// Rows 20 px tall, 30 px pitch, 200 px visible band.
    #[derive(Debug, Default)]
    struct Panel {
        rows: usize,
        open: bool,
        marked: Option<(Option<usize>, MarkerStyle)>,
        scroll_top: f64,
        list_scrolls: usize,
        tooltips: Vec<(usize, String)>,
    }

    impl NavPresenter for Panel {
        fn set_entries(&mut self, entries: &[NavEntry]) {
            self.rows = entries.len();
        }

        fn set_panel_visible(&mut self, _visible: bool) {}

        fn set_open(&mut self, open: bool) {
            self.open = open;
        }

        fn mark_active(&mut self, index: Option<usize>, style: MarkerStyle) {
            self.marked = Some((index, style));
        }

        fn list_metrics(&self) -> ListMetrics {
            ListMetrics {
                scroll_top: self.scroll_top,
                client_height: 200.0,
                scroll_height: self.rows as f64 * 30.0,
            }
        }

        fn item_span(&self, index: usize) -> Option<ItemSpan> {
            (index < self.rows).then(|| ItemSpan {
                top: index as f64 * 30.0,
                height: 20.0,
            })
        }

        fn set_list_scroll_top(&mut self, top: f64) {
            self.scroll_top = top;
            self.list_scrolls += 1;
        }

        fn show_tooltip(&mut self, index: usize, text: &str) {
            self.tooltips.push((index, text.to_owned()));
        }

        fn hide_tooltip(&mut self) {}
    }

    type TestNav = Navigator<Page, Driver, Panel, DeterministicClock>;

    fn nav(tops: &[f64]) -> TestNav {
        let page = Page {
            tops: tops.to_vec(),
            ..Page::default()
        };
        let mut n = Navigator::new(
            NavConfig::default(),
            page,
            Driver::default(),
            Panel::default(),
            DeterministicClock::new(),
        );
        n.boot();
        n
    }

    #[test]
    fn boot_seeds_index_from_scroll_position() {
        let mut n = nav(&[0.0, 500.0, 1200.0, 2000.0]);
        assert_eq!(n.active_index(), Some(0));

        n.document_mut().scroll_y = 600.0;
        n.on_scroll();
        n.on_animation_frame();
        assert_eq!(n.active_index(), Some(1));
    }

    #[test]
    fn empty_document_leaves_index_unset() {
        let mut n = nav(&[]);
        assert_eq!(n.active_index(), None);
        assert!(n.scroll_context().is_none());
        n.jump_relative(1);
        n.jump_to(0);
        assert_eq!(n.active_index(), None);
        assert_eq!(n.on_panel_wheel(10.0), WheelOutcome::PassThrough);
    }

    #[test]
    fn first_binding_has_no_previous_target() {
        let n = nav(&[0.0, 500.0]);
        assert_eq!(n.driver().binds, vec![(None, ScrollTarget::Window)]);
    }

    #[test]
    fn wheel_jump_clamps_at_end() {
        let mut n = nav(&[0.0, 500.0, 1200.0, 2000.0]);
        n.jump_to(3);
        n.jump_relative(1);
        assert_eq!(n.active_index(), Some(3));
        n.jump_relative(-10);
        assert_eq!(n.active_index(), Some(0));
    }

    #[test]
    fn click_scrolls_with_lead_in() {
        let mut n = nav(&[0.0, 500.0, 1200.0, 2000.0]);
        n.jump_to(2);
        let req = n.driver().scrolls.last().copied().expect("scroll request");
        assert_eq!(req.anchor, 2);
        assert_eq!(req.top, 1120.0);
        assert_eq!(req.target, ScrollTarget::Window);
    }

    #[test]
    fn lead_in_never_scrolls_above_zero() {
        let mut n = nav(&[30.0, 500.0]);
        n.jump_to(0);
        assert_eq!(n.driver().scrolls.last().map(|r| r.top), Some(0.0));
    }

    #[test]
    fn detached_anchor_skips_viewport_drive() {
        let mut n = nav(&[0.0, 500.0, 1200.0]);
        n.document_mut().detached.push(2);
        n.jump_to(2);
        assert_eq!(n.active_index(), Some(2));
        assert!(n.driver().scrolls.is_empty());
    }

    #[test]
    fn jump_beats_pending_recompute() {
        let mut n = nav(&[0.0, 500.0, 1200.0, 2000.0]);
        n.document_mut().scroll_y = 600.0;
        n.on_scroll();
        n.jump_to(3);
        n.on_animation_frame();
        assert_eq!(n.active_index(), Some(3));
    }

    #[test]
    fn zero_delta_wheel_is_consumed_without_moving() {
        let mut n = nav(&[0.0, 500.0]);
        assert_eq!(n.on_panel_wheel(0.0), WheelOutcome::Consumed);
        assert_eq!(n.active_index(), Some(0));
        assert!(n.driver().scrolls.is_empty());
    }

    #[test]
    fn marker_style_tracks_hover() {
        let mut n = nav(&[0.0, 500.0]);
        assert_eq!(n.presenter().marked, Some((Some(0), MarkerStyle::Collapsed)));
        n.set_hovered(true);
        assert!(n.presenter().open);
        assert_eq!(n.presenter().marked, Some((Some(0), MarkerStyle::Expanded)));
    }

    #[test]
    fn shrinking_rebuild_keeps_index_in_range() {
        let mut n = nav(&[0.0, 500.0, 1200.0, 2000.0]);
        n.jump_to(3);
        n.document_mut().tops.truncate(2);
        n.rebuild();
        let active = n.active_index().expect("non-empty");
        assert!(active < 2);
    }

    #[test]
    fn tooltip_fires_after_delay_for_long_titles() {
        let mut n = nav(&[0.0, 500.0]);
        n.entries[1].title = "turn…".into();
        n.entries[1].full_text = "turn 1 and much more".into();
        n.set_hovered(true);
        n.on_item_enter(1);
        n.clock_mut().advance_ms(1899);
        n.on_timer();
        assert!(n.presenter().tooltips.is_empty());
        n.clock_mut().advance_ms(1);
        n.on_timer();
        assert_eq!(n.presenter().tooltips, vec![(1, "turn 1 and much more".to_owned())]);
    }

    #[test]
    fn short_titles_never_get_tooltips() {
        let mut n = nav(&[0.0, 500.0]);
        n.set_hovered(true);
        n.on_item_enter(0);
        assert_eq!(n.next_deadline(), None);
    }
}
