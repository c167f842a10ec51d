#![forbid(unsafe_code)]

//! Navrail public facade crate.
//!
//! This crate provides the stable surface for host adapters. It re-exports
//! the measurement layer (`navrail-core`) and the navigation runtime
//! (`navrail-runtime`) and offers a prelude with everything an adapter
//! needs to implement and drive a [`Navigator`].

// --- Core re-exports -------------------------------------------------------

pub use navrail_core::clock::{DeterministicClock, MonotonicClock, SystemClock};
pub use navrail_core::geometry::{BoxMetrics, OverflowY, ScrollTarget, WindowMetrics};
pub use navrail_core::label::NavEntry;
pub use navrail_core::layout::{AnchorGeometry, DocumentProvider, LayoutTree};
pub use navrail_core::position_index::{closest_index, current_index};
pub use navrail_core::scroll_container::{ResolverConfig, ScrollContext, resolve_scroll_target};

// --- Runtime re-exports ----------------------------------------------------

pub use navrail_runtime::{
    EdgeMasks, ItemSpan, JumpViewportPolicy, ListMetrics, MarkerStyle, NavConfig,
    NavConfigError, NavPresenter, Navigator, PanelLayout, ScrollRequest, ViewportDriver,
    WheelOutcome,
};

#[cfg(feature = "tracing-json")]
pub use navrail_core::logging::init_json_logging;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DocumentProvider, LayoutTree, MarkerStyle, MonotonicClock, NavConfig, NavEntry,
        NavPresenter, Navigator, ScrollRequest, ScrollTarget, SystemClock, ViewportDriver,
        WheelOutcome,
    };

    pub use crate::{core, runtime};
}

pub use navrail_core as core;
pub use navrail_runtime as runtime;
