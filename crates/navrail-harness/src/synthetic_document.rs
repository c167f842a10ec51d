#![forbid(unsafe_code)]

//! A geometry-table document for deterministic navigation tests.
//!
//! [`SyntheticDocument`] stands in for a browser DOM. Every node has a fixed
//! top in document coordinates; client-relative positions are derived on
//! each query from the current window and container scroll offsets, so a
//! scroll or reflow is visible to the navigator exactly as a live layout
//! would be.
//!
//! # Usage
//!
//! ```
//! use navrail_core::layout::{DocumentProvider, LayoutTree};
//! use navrail_harness::SyntheticDocument;
//!
//! let (doc, scroller) = SyntheticDocument::chat(&[0.0, 500.0, 1200.0]);
//! assert_eq!(doc.query_anchors().len(), 3);
//! assert!(doc.box_metrics(scroller).scroll_height > 1200.0);
//! ```

use navrail_core::geometry::{BoxMetrics, OverflowY, ScrollTarget, WindowMetrics};
use navrail_core::layout::{DocumentProvider, LayoutTree};

/// Node handle in a [`SyntheticDocument`].
pub type NodeId = u32;

/// Default window width for the chat layouts.
pub const CHAT_WINDOW_WIDTH: f64 = 1280.0;
/// Default window height for the chat layouts.
pub const CHAT_WINDOW_HEIGHT: f64 = 800.0;
/// Visible height of the chat transcript scroller.
pub const CHAT_SCROLLER_HEIGHT: f64 = 700.0;
/// Height given to each synthetic turn.
pub const TURN_HEIGHT: f64 = 120.0;

#[derive(Debug, Clone)]
struct NodeRecord {
    parent: Option<NodeId>,
    overflow: OverflowY,
    metrics: BoxMetrics,
    top: f64,
    connected: bool,
    text: String,
}

/// In-memory layout tree with mutable scroll state.
#[derive(Debug, Clone)]
pub struct SyntheticDocument {
    nodes: Vec<NodeRecord>,
    anchors: Vec<NodeId>,
    window: WindowMetrics,
    document_height: f64,
}

impl SyntheticDocument {
    /// An empty document in a `width` x `height` window.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            nodes: Vec::new(),
            anchors: Vec::new(),
            window: WindowMetrics::new(width, height),
            document_height: height,
        }
    }

    /// A transcript that scrolls the window: anchors directly under a
    /// non-scrolling body.
    #[must_use]
    pub fn windowed(tops: &[f64]) -> (Self, NodeId) {
        let mut doc = Self::new(CHAT_WINDOW_WIDTH, CHAT_WINDOW_HEIGHT);
        let body = doc.add_node(
            None,
            OverflowY::Visible,
            BoxMetrics::new(CHAT_WINDOW_WIDTH, CHAT_WINDOW_HEIGHT, CHAT_WINDOW_HEIGHT),
            0.0,
        );
        for (i, &top) in tops.iter().enumerate() {
            doc.add_anchor(body, top, format!("Turn {i}"));
        }
        (doc, body)
    }

    /// A chat-app layout: `body > main > scroller > turns`, where the
    /// scroller is the element that actually scrolls.
    #[must_use]
    pub fn chat(tops: &[f64]) -> (Self, NodeId) {
        let mut doc = Self::new(CHAT_WINDOW_WIDTH, CHAT_WINDOW_HEIGHT);
        let body = doc.add_node(
            None,
            OverflowY::Hidden,
            BoxMetrics::new(CHAT_WINDOW_WIDTH, CHAT_WINDOW_HEIGHT, CHAT_WINDOW_HEIGHT),
            0.0,
        );
        let main = doc.add_node(
            Some(body),
            OverflowY::Visible,
            BoxMetrics::new(1000.0, CHAT_WINDOW_HEIGHT, CHAT_WINDOW_HEIGHT),
            0.0,
        );
        let content = tops.last().map_or(0.0, |&t| t + TURN_HEIGHT);
        let scroller = doc.add_node(
            Some(main),
            OverflowY::Auto,
            BoxMetrics::new(1000.0, CHAT_SCROLLER_HEIGHT, content.max(CHAT_SCROLLER_HEIGHT)),
            60.0,
        );
        for (i, &top) in tops.iter().enumerate() {
            doc.add_anchor(scroller, 60.0 + top, format!("Turn {i}"));
        }
        (doc, scroller)
    }

    /// Add a non-anchor node whose top sits at `top` in document coordinates.
    pub fn add_node(
        &mut self,
        parent: Option<NodeId>,
        overflow: OverflowY,
        metrics: BoxMetrics,
        top: f64,
    ) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(NodeRecord {
            parent,
            overflow,
            metrics,
            top,
            connected: true,
            text: String::new(),
        });
        self.document_height = self.document_height.max(top + metrics.scroll_height);
        id
    }

    /// Append an anchor after every existing one.
    pub fn add_anchor(&mut self, parent: NodeId, top: f64, text: impl Into<String>) -> NodeId {
        let id = self.add_node(
            Some(parent),
            OverflowY::Visible,
            BoxMetrics::new(800.0, TURN_HEIGHT, TURN_HEIGHT),
            top,
        );
        self.nodes[id as usize].text = text.into();
        self.anchors.push(id);
        self.grow_parent(parent, top + TURN_HEIGHT);
        id
    }

    /// Detach `node`; it stops being an anchor and reports disconnected.
    pub fn remove(&mut self, node: NodeId) {
        if let Some(rec) = self.nodes.get_mut(node as usize) {
            rec.connected = false;
        }
        self.anchors.retain(|&a| a != node);
    }

    /// Detach every anchor.
    pub fn clear_anchors(&mut self) {
        for a in std::mem::take(&mut self.anchors) {
            self.nodes[a as usize].connected = false;
        }
    }

    /// Change the text an anchor reports.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(rec) = self.nodes.get_mut(node as usize) {
            rec.text = text.into();
        }
    }

    /// Move a node to a new document top (a reflow).
    pub fn set_top(&mut self, node: NodeId, top: f64) {
        if let Some(rec) = self.nodes.get_mut(node as usize) {
            rec.top = top;
        }
    }

    /// Set a node's overflow style.
    pub fn set_overflow(&mut self, node: NodeId, overflow: OverflowY) {
        if let Some(rec) = self.nodes.get_mut(node as usize) {
            rec.overflow = overflow;
        }
    }

    /// Resize the window. `client_width` follows the new width.
    pub fn resize_window(&mut self, width: f64, height: f64) {
        let scroll_y = self.window.scroll_y;
        self.window = WindowMetrics::new(width, height).with_scroll_y(scroll_y);
    }

    /// Reserve `width` px of the window for a classic scrollbar.
    pub fn set_window_scrollbar(&mut self, width: f64) {
        self.window.client_width = self.window.inner_width - width;
    }

    /// Scroll a target, clamped to its scrollable range.
    pub fn set_scroll(&mut self, target: ScrollTarget<NodeId>, top: f64) {
        match target {
            ScrollTarget::Window => {
                let max = (self.document_height - self.window.inner_height).max(0.0);
                self.window.scroll_y = top.clamp(0.0, max);
            }
            ScrollTarget::Element(node) => {
                if let Some(rec) = self.nodes.get_mut(node as usize) {
                    let m = &mut rec.metrics;
                    let max = (m.scroll_height - m.client_height).max(0.0);
                    m.scroll_top = top.clamp(0.0, max);
                }
            }
        }
    }

    /// Current scroll offset of a target.
    #[must_use]
    pub fn scroll_of(&self, target: ScrollTarget<NodeId>) -> f64 {
        match target {
            ScrollTarget::Window => self.window.scroll_y,
            ScrollTarget::Element(node) => self.box_metrics(node).scroll_top,
        }
    }

    /// Current anchors in document order.
    #[must_use]
    pub fn anchor_ids(&self) -> &[NodeId] {
        &self.anchors
    }

    fn grow_parent(&mut self, parent: NodeId, bottom: f64) {
        let Some(rec) = self.nodes.get_mut(parent as usize) else {
            return;
        };
        let needed = bottom - rec.top;
        if needed > rec.metrics.scroll_height {
            rec.metrics.scroll_height = needed;
        }
        self.document_height = self.document_height.max(bottom);
    }

    /// Sum of scroll offsets applied to `node` by its scrolling ancestors.
    fn ancestor_scroll(&self, node: NodeId) -> f64 {
        let mut total = 0.0;
        let mut cur = self.parent(node);
        while let Some(p) = cur {
            total += self.nodes[p as usize].metrics.scroll_top;
            cur = self.parent(p);
        }
        total
    }
}

impl LayoutTree for SyntheticDocument {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node as usize).and_then(|n| n.parent)
    }

    fn overflow_y(&self, node: NodeId) -> OverflowY {
        self.nodes
            .get(node as usize)
            .map_or(OverflowY::Visible, |n| n.overflow)
    }

    fn box_metrics(&self, node: NodeId) -> BoxMetrics {
        self.nodes
            .get(node as usize)
            .map_or_else(BoxMetrics::default, |n| n.metrics)
    }

    fn client_top(&self, node: NodeId) -> f64 {
        let Some(rec) = self.nodes.get(node as usize) else {
            return 0.0;
        };
        rec.top - self.ancestor_scroll(node) - self.window.scroll_y
    }

    fn window(&self) -> WindowMetrics {
        self.window
    }

    fn is_connected(&self, node: NodeId) -> bool {
        self.nodes.get(node as usize).is_some_and(|n| n.connected)
    }
}

impl DocumentProvider for SyntheticDocument {
    fn query_anchors(&self) -> Vec<NodeId> {
        self.anchors.clone()
    }

    fn anchor_text(&self, node: NodeId) -> String {
        self.nodes
            .get(node as usize)
            .map(|n| n.text.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navrail_core::scroll_container::{ResolverConfig, ScrollContext};

    #[test]
    fn chat_layout_resolves_to_scroller() {
        let (doc, scroller) = SyntheticDocument::chat(&[0.0, 500.0, 1200.0, 2000.0]);
        let seed = doc.anchor_ids()[0];
        let ctx = ScrollContext::resolve(&doc, seed, &ResolverConfig::default());
        assert_eq!(*ctx.target(), ScrollTarget::Element(scroller));
    }

    #[test]
    fn windowed_layout_resolves_to_window() {
        let (doc, _) = SyntheticDocument::windowed(&[0.0, 500.0, 1200.0]);
        let seed = doc.anchor_ids()[0];
        let ctx = ScrollContext::resolve(&doc, seed, &ResolverConfig::default());
        assert!(ctx.target().is_window());
    }

    #[test]
    fn container_scroll_moves_client_tops() {
        let (mut doc, scroller) = SyntheticDocument::chat(&[0.0, 500.0, 1200.0]);
        let a1 = doc.anchor_ids()[1];
        assert_eq!(doc.client_top(a1), 560.0);
        doc.set_scroll(ScrollTarget::Element(scroller), 300.0);
        assert_eq!(doc.client_top(a1), 260.0);
        assert_eq!(doc.client_top(scroller), 60.0);
    }

    #[test]
    fn scroll_is_clamped() {
        let (mut doc, scroller) = SyntheticDocument::chat(&[0.0, 500.0, 1200.0]);
        doc.set_scroll(ScrollTarget::Element(scroller), 1.0e6);
        let m = doc.box_metrics(scroller);
        assert_eq!(m.scroll_top, m.scroll_height - m.client_height);
        doc.set_scroll(ScrollTarget::Element(scroller), -50.0);
        assert_eq!(doc.scroll_of(ScrollTarget::Element(scroller)), 0.0);
    }

    #[test]
    fn removed_anchor_is_detached() {
        let (mut doc, _) = SyntheticDocument::chat(&[0.0, 500.0]);
        let a0 = doc.anchor_ids()[0];
        doc.remove(a0);
        assert!(!doc.is_connected(a0));
        assert_eq!(doc.query_anchors().len(), 1);
        doc.clear_anchors();
        assert!(doc.query_anchors().is_empty());
    }
}
