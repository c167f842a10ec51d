#![forbid(unsafe_code)]

//! Navrail Runtime
//!
//! This crate owns the mutable side of transcript navigation: when to
//! rebuild, which entry is active, and how the side list and the viewport
//! follow each other.
//!
//! # Key Components
//!
//! - [`Navigator`] - The active-entry synchronizer; receives every host signal
//! - [`UpdateScheduler`] - Debounced rebuilds and frame-gated recomputes
//! - [`ManualScrollHint`] - Detects a user browsing the side list by hand
//! - [`HoverTip`] - Delayed full-text tooltip
//! - [`NavConfig`] - Tunable policy, loadable from TOML/JSON with `policy-config`
//! - [`ViewportDriver`] / [`NavPresenter`] - Output-side host traits
//!
//! # Role in Navrail
//! `navrail-runtime` is the orchestrator. It reads layout through the
//! `navrail-core` traits, decides, and then tells the host what to draw and
//! where to scroll through [`collaborators`].
//!
//! # How it fits in the system
//! A host adapter implements [`navrail_core::layout::DocumentProvider`],
//! [`ViewportDriver`], and [`NavPresenter`], forwards DOM events to the
//! navigator's `on_*` methods, and schedules timers and animation frames from
//! [`Navigator::next_deadline`] and [`Navigator::wants_frame`]. The
//! `navrail-harness` crate supplies synthetic versions of all three for tests.

pub mod collaborators;
pub mod hover_tip;
pub mod list_viewport;
pub mod nav_config;
pub mod navigator;
pub mod update_scheduler;

pub use collaborators::{MarkerStyle, NavPresenter, PanelLayout, ScrollRequest, ViewportDriver};
pub use hover_tip::HoverTip;
pub use list_viewport::{EdgeMasks, ItemSpan, ListMetrics, ManualScrollHint, keep_visible};
pub use nav_config::{
    JumpViewportPolicy, ListPolicyConfig, NavConfig, NavConfigError, PanelPolicyConfig,
    ResolverPolicyConfig, SchedulerPolicyConfig, SyncPolicyConfig,
};
pub use navigator::{Navigator, WheelOutcome};
pub use update_scheduler::{
    ChannelStats, CoalescingChannel, FrameGate, SchedulerStats, UpdateScheduler,
};
