#![forbid(unsafe_code)]

//! Scroll container resolution.
//!
//! Chat transcripts rarely scroll the window itself. The conversation usually
//! lives inside some `overflow-y: auto` element several levels up from each
//! message, and the messages contain their own small scrollers (code blocks,
//! tables) that must be ignored.
//!
//! [`resolve_scroll_target`] walks the ancestors of a seed anchor and keeps
//! every element that is both scrollable and large relative to the window.
//! The tallest candidate wins. When nothing qualifies, the window is used.
//!
//! [`ScrollContext`] remembers the resolved target and the seed it came from,
//! and converts raw layout readings into the container's coordinate space.
//!
//! # Example
//!
//! ```
//! use navrail_core::geometry::ScrollTarget;
//! use navrail_core::scroll_container::ScrollContext;
//!
//! let ctx: ScrollContext<u32> = ScrollContext::window();
//! assert_eq!(ctx.target(), &ScrollTarget::Window);
//! assert_eq!(ctx.seed(), None);
//! ```

use crate::geometry::ScrollTarget;
use crate::layout::{AnchorGeometry, LayoutTree};

/// Thresholds that decide whether an ancestor is the real chat viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Content must exceed the visible height by more than this (px).
    pub min_overflow: f64,
    /// Upper bound on the required height (px).
    pub height_cap: f64,
    /// Required height as a fraction of the window height.
    pub height_fraction: f64,
    /// Upper bound on the required width (px).
    pub width_cap: f64,
    /// Required width as a fraction of the window width.
    pub width_fraction: f64,
    /// Candidates must be strictly taller than this (px).
    pub height_floor: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_overflow: 40.0,
            height_cap: 520.0,
            height_fraction: 0.40,
            width_cap: 520.0,
            width_fraction: 0.35,
            height_floor: 200.0,
        }
    }
}

impl ResolverConfig {
    /// Minimum client height for a window of `inner_height` px.
    #[must_use]
    pub fn min_height(&self, inner_height: f64) -> f64 {
        self.height_cap.min((inner_height * self.height_fraction).floor())
    }

    /// Minimum client width for a window of `inner_width` px.
    #[must_use]
    pub fn min_width(&self, inner_width: f64) -> f64 {
        self.width_cap.min((inner_width * self.width_fraction).floor())
    }
}

/// Find the element that owns the vertical scroll for `seed`.
///
/// The walk starts at the seed's parent so a scrollable message body is
/// never mistaken for the transcript. Among qualifying ancestors the one
/// with the largest client height wins; on a tie the one nearest the seed
/// is kept. Falls back to [`ScrollTarget::Window`].
pub fn resolve_scroll_target<T: LayoutTree>(
    tree: &T,
    seed: T::Node,
    config: &ResolverConfig,
) -> ScrollTarget<T::Node> {
    let window = tree.window();
    let min_height = config.min_height(window.inner_height);
    let min_width = config.min_width(window.inner_width);

    let mut best: Option<(T::Node, f64)> = None;
    let mut cursor = tree.parent(seed);
    while let Some(node) = cursor {
        if tree.overflow_y(node).permits_scroll() {
            let m = tree.box_metrics(node);
            let overflows = m.scroll_height > m.client_height + config.min_overflow;
            let big_enough = m.client_height >= min_height
                && m.client_width >= min_width
                && m.client_height > config.height_floor;
            if overflows && big_enough && best.is_none_or(|(_, h)| m.client_height > h) {
                best = Some((node, m.client_height));
            }
        }
        cursor = tree.parent(node);
    }

    match best {
        Some((node, _)) => ScrollTarget::Element(node),
        None => ScrollTarget::Window,
    }
}

/// The currently bound scroll container.
///
/// Exactly one context is active per navigator. It is replaced wholesale
/// when re-resolution yields a different target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollContext<N> {
    target: ScrollTarget<N>,
    seed: Option<N>,
}

impl<N: Copy + Eq> ScrollContext<N> {
    /// A context bound to the window, with no seed.
    #[must_use]
    pub const fn window() -> Self {
        Self {
            target: ScrollTarget::Window,
            seed: None,
        }
    }

    /// Resolve a fresh context from `seed`.
    pub fn resolve<T>(tree: &T, seed: N, config: &ResolverConfig) -> Self
    where
        T: LayoutTree<Node = N>,
    {
        let target = resolve_scroll_target(tree, seed, config);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "scroll_container.resolve",
            window = target.is_window()
        );
        Self {
            target,
            seed: Some(seed),
        }
    }

    /// The resolved target.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &ScrollTarget<N> {
        &self.target
    }

    /// The anchor this context was resolved from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Option<N> {
        self.seed
    }

    /// Current vertical scroll offset of the target.
    pub fn scroll_offset<T>(&self, tree: &T) -> f64
    where
        T: LayoutTree<Node = N>,
    {
        match self.target {
            ScrollTarget::Window => tree.window().scroll_y,
            ScrollTarget::Element(node) => tree.box_metrics(node).scroll_top,
        }
    }

    /// Visible height of the target.
    pub fn viewport_height<T>(&self, tree: &T) -> f64
    where
        T: LayoutTree<Node = N>,
    {
        match self.target {
            ScrollTarget::Window => tree.window().viewport_height(),
            ScrollTarget::Element(node) => {
                let h = tree.box_metrics(node).client_height;
                if h > 0.0 {
                    h
                } else {
                    tree.window().viewport_height()
                }
            }
        }
    }

    /// Offset of `anchor`'s top edge within the target's scrollable content.
    pub fn anchor_offset<T>(&self, tree: &T, anchor: N) -> f64
    where
        T: LayoutTree<Node = N>,
    {
        match self.target {
            ScrollTarget::Window => tree.client_top(anchor) + tree.window().scroll_y,
            ScrollTarget::Element(node) => {
                tree.client_top(anchor) - tree.client_top(node)
                    + tree.box_metrics(node).scroll_top
            }
        }
    }

    /// Borrow this context together with a tree as an [`AnchorGeometry`].
    #[must_use]
    pub fn measure<'a, T>(&'a self, tree: &'a T) -> MeasuredContext<'a, T>
    where
        T: LayoutTree<Node = N>,
    {
        MeasuredContext { tree, context: self }
    }
}

impl<N: Copy + Eq> Default for ScrollContext<N> {
    fn default() -> Self {
        Self::window()
    }
}

/// A [`ScrollContext`] paired with live layout access.
#[derive(Debug)]
pub struct MeasuredContext<'a, T: LayoutTree> {
    tree: &'a T,
    context: &'a ScrollContext<T::Node>,
}

impl<T: LayoutTree> AnchorGeometry for MeasuredContext<'_, T> {
    type Anchor = T::Node;

    fn top_offset_of(&self, anchor: &T::Node) -> f64 {
        self.context.anchor_offset(self.tree, *anchor)
    }

    fn viewport_height(&self) -> f64 {
        self.context.viewport_height(self.tree)
    }

    fn viewport_scroll_offset(&self) -> f64 {
        self.context.scroll_offset(self.tree)
    }
}
