#![forbid(unsafe_code)]

//! Capability traits through which the engine reads the host document.
//!
//! The engine never holds a reference to a live DOM. Everything it knows
//! about layout comes through these traits, and every call is expected to
//! measure *now*: implementations must not hand back cached positions, since
//! anchors move whenever the transcript reflows.
//!
//! Three layers, from raw to abstract:
//!
//! - [`LayoutTree`]: ancestry, computed overflow, and box measurements.
//! - [`DocumentProvider`]: which nodes are navigable anchors, and their text.
//! - [`AnchorGeometry`]: offsets already expressed in the coordinate space of
//!   the bound scroll container. The position index only needs this one, so
//!   tests can feed it a plain table of numbers.

use std::fmt::Debug;
use std::hash::Hash;

use crate::geometry::{BoxMetrics, OverflowY, WindowMetrics};

/// Raw, live layout access for a host document.
pub trait LayoutTree {
    /// Opaque handle to a document node.
    type Node: Copy + Eq + Hash + Debug;

    /// Parent element of `node`.
    ///
    /// Returns `None` when the parent would be the document root element (or
    /// when `node` is detached), so ancestor walks stop below the root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Computed `overflow-y` of `node`.
    fn overflow_y(&self, node: Self::Node) -> OverflowY;

    /// Client and scroll box measurements of `node`.
    fn box_metrics(&self, node: Self::Node) -> BoxMetrics;

    /// Top edge of `node`'s bounding box, relative to the window viewport.
    fn client_top(&self, node: Self::Node) -> f64;

    /// Window viewport measurements.
    fn window(&self) -> WindowMetrics;

    /// Whether `node` is still attached to the document.
    fn is_connected(&self, node: Self::Node) -> bool;
}

/// Supplies the navigable anchors of the document.
pub trait DocumentProvider: LayoutTree {
    /// Ordered anchors currently present, in document order.
    fn query_anchors(&self) -> Vec<Self::Node>;

    /// Raw text content of an anchor, used for labels.
    fn anchor_text(&self, node: Self::Node) -> String;
}

/// Anchor positions in the coordinate space of one scroll container.
pub trait AnchorGeometry {
    /// Anchor handle.
    type Anchor;

    /// Document offset of the anchor's top edge within the container.
    fn top_offset_of(&self, anchor: &Self::Anchor) -> f64;

    /// Visible height of the container.
    fn viewport_height(&self) -> f64;

    /// Current vertical scroll offset of the container.
    fn viewport_scroll_offset(&self) -> f64;
}

impl<G: AnchorGeometry + ?Sized> AnchorGeometry for &G {
    type Anchor = G::Anchor;

    fn top_offset_of(&self, anchor: &Self::Anchor) -> f64 {
        (**self).top_offset_of(anchor)
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn viewport_scroll_offset(&self) -> f64 {
        (**self).viewport_scroll_offset()
    }
}
