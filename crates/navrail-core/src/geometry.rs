#![forbid(unsafe_code)]

//! Geometric primitives for vertical scroll synchronization.
//!
//! All values are CSS pixels as reported by the host layout engine. Only the
//! vertical axis matters to navigation; widths appear solely to reject
//! narrow scrollable widgets during container resolution.

/// Computed vertical overflow behavior of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowY {
    /// Content spills out; the element never scrolls.
    #[default]
    Visible,
    /// Content is clipped but may still be scrolled programmatically.
    Hidden,
    /// Content is clipped with no scrolling at all.
    Clip,
    /// Scrollbars appear when content overflows.
    Auto,
    /// Scrollbars are always present.
    Scroll,
    /// Legacy overlay scrollbars (treated like `Auto`).
    Overlay,
}

impl OverflowY {
    /// Whether the user can scroll an element with this overflow style.
    #[inline]
    #[must_use]
    pub const fn permits_scroll(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll | Self::Overlay)
    }
}

/// Scroll-relevant box measurements of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxMetrics {
    /// Visible (padding box) width.
    pub client_width: f64,
    /// Visible (padding box) height.
    pub client_height: f64,
    /// Total height of the scrollable content.
    pub scroll_height: f64,
    /// Current vertical scroll offset.
    pub scroll_top: f64,
}

impl BoxMetrics {
    /// Create metrics for an element scrolled to the top.
    #[must_use]
    pub const fn new(client_width: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            client_width,
            client_height,
            scroll_height,
            scroll_top: 0.0,
        }
    }

    /// Set the current scroll offset.
    #[must_use]
    pub const fn with_scroll_top(mut self, scroll_top: f64) -> Self {
        self.scroll_top = scroll_top;
        self
    }

    /// Amount of content hidden below the visible box.
    #[inline]
    #[must_use]
    pub fn overflow(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Measurements of the top-level window viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowMetrics {
    /// `innerWidth`, scrollbar included.
    pub inner_width: f64,
    /// `innerHeight`, scrollbar included.
    pub inner_height: f64,
    /// Document scroll offset.
    pub scroll_y: f64,
    /// Width of the document element's client box (excludes the scrollbar).
    pub client_width: f64,
}

impl WindowMetrics {
    /// Height used when the host reports a zero-sized window.
    pub const FALLBACK_HEIGHT: f64 = 800.0;

    /// Create window metrics scrolled to the top, without a classic scrollbar.
    #[must_use]
    pub const fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            inner_width,
            inner_height,
            scroll_y: 0.0,
            client_width: inner_width,
        }
    }

    /// Set the document scroll offset.
    #[must_use]
    pub const fn with_scroll_y(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    /// Viewport height with the 800 px fallback for degenerate hosts.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        if self.inner_height > 0.0 {
            self.inner_height
        } else {
            Self::FALLBACK_HEIGHT
        }
    }

    /// Width occupied by a classic (non-overlay) vertical scrollbar.
    #[must_use]
    pub fn scrollbar_width(&self) -> f64 {
        (self.inner_width - self.client_width).max(0.0)
    }
}

/// The element that owns the vertical scroll offset relevant to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTarget<N> {
    /// The top-level window/document viewport.
    Window,
    /// A specific scrollable ancestor.
    Element(N),
}

impl<N> ScrollTarget<N> {
    /// Whether this target is the window viewport.
    #[inline]
    #[must_use]
    pub const fn is_window(&self) -> bool {
        matches!(self, Self::Window)
    }

    /// The container element, if this is not the window.
    #[inline]
    #[must_use]
    pub const fn element(&self) -> Option<&N> {
        match self {
            Self::Window => None,
            Self::Element(node) => Some(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrollable_overflow_styles() {
        assert!(OverflowY::Auto.permits_scroll());
        assert!(OverflowY::Scroll.permits_scroll());
        assert!(OverflowY::Overlay.permits_scroll());
        assert!(!OverflowY::Visible.permits_scroll());
        assert!(!OverflowY::Hidden.permits_scroll());
        assert!(!OverflowY::Clip.permits_scroll());
    }

    #[test]
    fn overflow_is_scroll_height_minus_client_height() {
        let m = BoxMetrics::new(600.0, 700.0, 5000.0).with_scroll_top(120.0);
        assert_eq!(m.overflow(), 4300.0);
        assert_eq!(m.scroll_top, 120.0);
    }

    #[test]
    fn window_height_falls_back_when_zero() {
        assert_eq!(WindowMetrics::new(1280.0, 0.0).viewport_height(), 800.0);
        assert_eq!(WindowMetrics::new(1280.0, 900.0).viewport_height(), 900.0);
    }

    #[test]
    fn scrollbar_width_never_negative() {
        let mut w = WindowMetrics::new(1280.0, 900.0);
        assert_eq!(w.scrollbar_width(), 0.0);
        w.client_width = 1265.0;
        assert_eq!(w.scrollbar_width(), 15.0);
        w.client_width = 1300.0;
        assert_eq!(w.scrollbar_width(), 0.0);
    }

    #[test]
    fn scroll_target_accessors() {
        let t: ScrollTarget<u32> = ScrollTarget::Element(7);
        assert_eq!(t.element(), Some(&7));
        assert!(!t.is_window());
        assert!(ScrollTarget::<u32>::Window.is_window());
        assert_eq!(ScrollTarget::<u32>::Window.element(), None);
    }
}
