// Forbid unsafe in production; deny (with targeted allows) in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: geometry, layout traits, scroll-container resolution, and the live
//! position index.
//!
//! # Role in Navrail
//! `navrail-core` is the measurement layer. It knows how to find the element
//! that really scrolls a transcript and how to map a scroll offset to the
//! nearest anchor, always reading layout live through host-supplied traits.
//!
//! # Primary responsibilities
//! - **Layout traits**: [`layout::LayoutTree`], [`layout::DocumentProvider`],
//!   [`layout::AnchorGeometry`].
//! - **Scroll container resolution**: [`scroll_container::resolve_scroll_target`]
//!   and the bound [`scroll_container::ScrollContext`].
//! - **Position index**: [`position_index::closest_index`].
//! - **Labels**: normalized, truncated entry titles.
//! - **Clock**: [`clock::MonotonicClock`] with system and deterministic sources.
//!
//! # How it fits in the system
//! The runtime (`navrail-runtime`) owns all mutable navigation state and
//! policy. It calls into this crate for every measurement, so this crate has
//! no state of its own beyond the resolved [`scroll_container::ScrollContext`].

pub mod clock;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod logging;
pub mod position_index;
pub mod scroll_container;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
