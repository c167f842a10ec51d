#![forbid(unsafe_code)]

//! A [`NavPresenter`] backed by a simulated side list.
//!
//! Rows are laid out at a fixed pitch inside a list whose visible height is
//! capped by the last applied [`PanelLayout`], so keep-visible scrolling and
//! list scrollability behave as they would in a real panel.

use navrail_core::label::NavEntry;
use navrail_runtime::collaborators::{MarkerStyle, NavPresenter, PanelLayout};
use navrail_runtime::list_viewport::{EdgeMasks, ItemSpan, ListMetrics};

/// Height of one list row.
pub const ROW_HEIGHT: f64 = 20.0;
/// Vertical space between consecutive row tops.
pub const ROW_PITCH: f64 = 30.0;
/// Default list height cap before any layout is applied.
pub const DEFAULT_LIST_MAX_HEIGHT: f64 = 250.0;

/// Simulated navigation panel.
#[derive(Debug, Clone)]
pub struct RecordingPresenter {
    entries: Vec<NavEntry>,
    visible: bool,
    open: bool,
    marked: Option<usize>,
    marker_style: MarkerStyle,
    list_scroll_top: f64,
    layout: PanelLayout,
    tooltip: Option<(usize, String)>,
    label_columns: Option<usize>,
    entry_sets: usize,
    list_scrolls: Vec<f64>,
    edge_masks: EdgeMasks,
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            visible: false,
            open: false,
            marked: None,
            marker_style: MarkerStyle::Collapsed,
            list_scroll_top: 0.0,
            layout: PanelLayout {
                list_max_height: DEFAULT_LIST_MAX_HEIGHT,
                right_inset: 0.0,
            },
            tooltip: None,
            label_columns: None,
            entry_sets: 0,
            list_scrolls: Vec::new(),
            edge_masks: EdgeMasks::default(),
        }
    }
}

impl RecordingPresenter {
    /// An empty, hidden panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat labels wider than `columns` cells as visually clipped.
    #[must_use]
    pub fn with_label_columns(mut self, columns: usize) -> Self {
        self.label_columns = Some(columns);
        self
    }

    /// Simulate the user scrolling the list by hand.
    ///
    /// The caller still forwards the event with `Navigator::on_list_scrolled`.
    pub fn user_scroll_list(&mut self, top: f64) {
        self.list_scroll_top = self.clamp_list_scroll(top);
    }

    /// Rendered rows.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Whether the panel is shown at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the panel is expanded.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Highlighted row.
    #[must_use]
    pub fn marked(&self) -> Option<usize> {
        self.marked
    }

    /// Style of the highlight.
    #[must_use]
    pub fn marker_style(&self) -> MarkerStyle {
        self.marker_style
    }

    /// Current list scroll offset.
    #[must_use]
    pub fn list_scroll_top(&self) -> f64 {
        self.list_scroll_top
    }

    /// Every programmatic list scroll, in order.
    #[must_use]
    pub fn list_scrolls(&self) -> &[f64] {
        &self.list_scrolls
    }

    /// Last applied panel layout.
    #[must_use]
    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    /// Visible tooltip, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<(usize, &str)> {
        self.tooltip.as_ref().map(|(i, t)| (*i, t.as_str()))
    }

    /// Edge fades last pushed by the navigator.
    #[must_use]
    pub fn edge_masks(&self) -> EdgeMasks {
        self.edge_masks
    }

    /// How many times the rows were replaced.
    #[must_use]
    pub fn entry_sets(&self) -> usize {
        self.entry_sets
    }

    fn content_height(&self) -> f64 {
        match self.entries.len() {
            0 => 0.0,
            n => (n - 1) as f64 * ROW_PITCH + ROW_HEIGHT,
        }
    }

    fn client_height(&self) -> f64 {
        self.content_height().min(self.layout.list_max_height)
    }

    fn clamp_list_scroll(&self, top: f64) -> f64 {
        let max = (self.content_height() - self.client_height()).max(0.0);
        top.clamp(0.0, max)
    }
}

impl NavPresenter for RecordingPresenter {
    fn set_entries(&mut self, entries: &[NavEntry]) {
        self.entries = entries.to_vec();
        self.entry_sets += 1;
        self.list_scroll_top = self.clamp_list_scroll(self.list_scroll_top);
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn mark_active(&mut self, index: Option<usize>, style: MarkerStyle) {
        self.marked = index;
        self.marker_style = style;
    }

    fn list_metrics(&self) -> ListMetrics {
        ListMetrics {
            scroll_top: self.list_scroll_top,
            client_height: self.client_height(),
            scroll_height: self.content_height(),
        }
    }

    fn item_span(&self, index: usize) -> Option<ItemSpan> {
        (index < self.entries.len()).then(|| ItemSpan {
            top: index as f64 * ROW_PITCH,
            height: ROW_HEIGHT,
        })
    }

    fn set_list_scroll_top(&mut self, top: f64) {
        self.list_scroll_top = self.clamp_list_scroll(top);
        self.list_scrolls.push(self.list_scroll_top);
    }

    fn label_overflows(&self, index: usize) -> bool {
        match (self.label_columns, self.entries.get(index)) {
            (Some(cols), Some(entry)) => entry.exceeds_columns(cols),
            _ => false,
        }
    }

    fn show_tooltip(&mut self, index: usize, text: &str) {
        self.tooltip = Some((index, text.to_owned()));
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn apply_panel_layout(&mut self, layout: PanelLayout) {
        self.layout = layout;
        self.list_scroll_top = self.clamp_list_scroll(self.list_scroll_top);
    }

    fn set_edge_masks(&mut self, masks: EdgeMasks) {
        self.edge_masks = masks;
    }
}
