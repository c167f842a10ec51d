#![forbid(unsafe_code)]

//! Policy-as-data configuration for the navigator.
//!
//! Every timing window, pixel threshold, and tie-break policy lives in one
//! [`NavConfig`] that can be loaded from TOML or JSON at startup.
//!
//! # Loading
//!
//! ```toml
//! # navrail.toml
//! [scheduler]
//! rebuild_debounce_ms = 250
//!
//! [sync]
//! lead_in_px = 96.0
//! jump_viewport = "settle"
//! ```
//!
//! ```rust,ignore
//! let config = NavConfig::from_toml_file("navrail.toml")?;
//! let config = NavConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `NavConfig::default()` reproduces the stock overlay behavior: 200 ms
//! rebuild debounce, 350 ms manual-scroll suppression, 1.9 s tooltip delay,
//! 80 px lead-in, and the "current entry" probe a quarter of the way down
//! the viewport.

use core::time::Duration;

#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use navrail_core::label::DEFAULT_TITLE_MAX;
use navrail_core::position_index::DEFAULT_VIEWPORT_FRACTION;
use navrail_core::scroll_container::ResolverConfig;

// ---------------------------------------------------------------------------
// Top-level NavConfig
// ---------------------------------------------------------------------------

/// Top-level configuration for a navigator instance.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct NavConfig {
    /// Coalescing of rebuild triggers.
    pub scheduler: SchedulerPolicyConfig,

    /// Active-entry synchronization.
    pub sync: SyncPolicyConfig,

    /// Side list and tooltip behavior.
    pub list: ListPolicyConfig,

    /// Scroll container resolution thresholds.
    pub resolver: ResolverPolicyConfig,

    /// Panel placement recomputed on resize.
    pub panel: PanelPolicyConfig,
}

impl NavConfig {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, NavConfigError> {
        toml::from_str(s).map_err(NavConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, NavConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NavConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, NavConfigError> {
        serde_json::from_str(s).map_err(NavConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, NavConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NavConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing wrong.
    pub fn validated(self) -> Result<Self, NavConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(NavConfigError::Validation(errors))
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.scheduler.rebuild_debounce_ms == 0 {
            errors.push("scheduler.rebuild_debounce_ms must be > 0".into());
        }

        if !(0.0..=1.0).contains(&self.sync.viewport_fraction) {
            errors.push(format!(
                "sync.viewport_fraction must be in [0, 1], got {}",
                self.sync.viewport_fraction
            ));
        }
        if self.sync.lead_in_px < 0.0 {
            errors.push(format!(
                "sync.lead_in_px must be >= 0, got {}",
                self.sync.lead_in_px
            ));
        }
        if self.sync.jump_viewport == JumpViewportPolicy::Settle && self.sync.jump_settle_ms == 0 {
            errors.push("sync.jump_settle_ms must be > 0 with the settle policy".into());
        }

        if self.list.keep_visible_padding_px < 0.0 {
            errors.push(format!(
                "list.keep_visible_padding_px must be >= 0, got {}",
                self.list.keep_visible_padding_px
            ));
        }
        if self.list.title_max_chars == 0 {
            errors.push("list.title_max_chars must be > 0".into());
        }

        let r = &self.resolver;
        for (name, value) in [
            ("resolver.height_fraction", r.height_fraction),
            ("resolver.width_fraction", r.width_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(format!("{name} must be in [0, 1], got {value}"));
            }
        }
        for (name, value) in [
            ("resolver.min_overflow_px", r.min_overflow_px),
            ("resolver.height_cap_px", r.height_cap_px),
            ("resolver.width_cap_px", r.width_cap_px),
            ("resolver.height_floor_px", r.height_floor_px),
        ] {
            if value < 0.0 {
                errors.push(format!("{name} must be >= 0, got {value}"));
            }
        }

        if self.panel.list_min_height_px > self.panel.list_max_height_px {
            errors.push(format!(
                "panel.list_min_height_px ({}) must not exceed panel.list_max_height_px ({})",
                self.panel.list_min_height_px, self.panel.list_max_height_px
            ));
        }

        errors
    }

    /// Build a [`ResolverConfig`] from this policy.
    #[must_use]
    pub fn to_resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            min_overflow: self.resolver.min_overflow_px,
            height_cap: self.resolver.height_cap_px,
            height_fraction: self.resolver.height_fraction,
            width_cap: self.resolver.width_cap_px,
            width_fraction: self.resolver.width_fraction,
            height_floor: self.resolver.height_floor_px,
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Debounce policy for list rebuilds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct SchedulerPolicyConfig {
    /// Delay between the first mutation signal and the rebuild (ms).
    pub rebuild_debounce_ms: u64,
}

impl Default for SchedulerPolicyConfig {
    fn default() -> Self {
        Self {
            rebuild_debounce_ms: 200,
        }
    }
}

impl SchedulerPolicyConfig {
    /// Rebuild debounce as a [`Duration`].
    #[must_use]
    pub const fn rebuild_debounce(&self) -> Duration {
        Duration::from_millis(self.rebuild_debounce_ms)
    }
}

/// How explicit wheel jumps drive the main viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(rename_all = "snake_case"))]
pub enum JumpViewportPolicy {
    /// Scroll the main viewport on every jump.
    #[default]
    Immediate,
    /// Scroll once, after successive wheel jumps pause for the settle window.
    Settle,
}

/// Active-entry synchronization policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct SyncPolicyConfig {
    /// Fraction of the viewport height, from the top, used as the probe.
    pub viewport_fraction: f64,
    /// Gap kept above an anchor when scrolling to it (px).
    pub lead_in_px: f64,
    /// How long a manual list scroll suppresses auto keep-visible (ms).
    pub manual_scroll_window_ms: u64,
    /// Main-viewport behavior for wheel jumps.
    pub jump_viewport: JumpViewportPolicy,
    /// Quiet period ending a burst of wheel jumps under
    /// [`JumpViewportPolicy::Settle`] (ms).
    pub jump_settle_ms: u64,
}

impl Default for SyncPolicyConfig {
    fn default() -> Self {
        Self {
            viewport_fraction: DEFAULT_VIEWPORT_FRACTION,
            lead_in_px: 80.0,
            manual_scroll_window_ms: 350,
            jump_viewport: JumpViewportPolicy::Immediate,
            jump_settle_ms: 350,
        }
    }
}

impl SyncPolicyConfig {
    /// Manual-scroll suppression window as a [`Duration`].
    #[must_use]
    pub const fn manual_scroll_window(&self) -> Duration {
        Duration::from_millis(self.manual_scroll_window_ms)
    }

    /// Wheel-jump settle window as a [`Duration`].
    #[must_use]
    pub const fn jump_settle(&self) -> Duration {
        Duration::from_millis(self.jump_settle_ms)
    }
}

/// Side list and tooltip policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct ListPolicyConfig {
    /// Margin kept between the active row and the list edges (px).
    pub keep_visible_padding_px: f64,
    /// Maximum title length in grapheme clusters.
    pub title_max_chars: usize,
    /// Hover time before the full-text tooltip appears (ms).
    pub tooltip_delay_ms: u64,
}

impl Default for ListPolicyConfig {
    fn default() -> Self {
        Self {
            keep_visible_padding_px: 14.0,
            title_max_chars: DEFAULT_TITLE_MAX,
            tooltip_delay_ms: 1900,
        }
    }
}

impl ListPolicyConfig {
    /// Tooltip delay as a [`Duration`].
    #[must_use]
    pub const fn tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_delay_ms)
    }
}

/// Scroll container resolution thresholds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct ResolverPolicyConfig {
    /// Minimum content overflow (px).
    pub min_overflow_px: f64,
    /// Cap on the required container height (px).
    pub height_cap_px: f64,
    /// Required height as a fraction of the window height.
    pub height_fraction: f64,
    /// Cap on the required container width (px).
    pub width_cap_px: f64,
    /// Required width as a fraction of the window width.
    pub width_fraction: f64,
    /// Containers must be taller than this (px).
    pub height_floor_px: f64,
}

impl Default for ResolverPolicyConfig {
    fn default() -> Self {
        let r = ResolverConfig::default();
        Self {
            min_overflow_px: r.min_overflow,
            height_cap_px: r.height_cap,
            height_fraction: r.height_fraction,
            width_cap_px: r.width_cap,
            width_fraction: r.width_fraction,
            height_floor_px: r.height_floor,
        }
    }
}

/// Panel placement recomputed on resize.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct PanelPolicyConfig {
    /// Upper bound on the list height (px).
    pub list_max_height_px: f64,
    /// Lower bound on the list height (px).
    pub list_min_height_px: f64,
    /// Vertical window space reserved around the list (px).
    pub list_height_margin_px: f64,
    /// Distance from the right edge before any gutter (px).
    pub base_right_inset_px: f64,
    /// Minimum gutter for overlay scrollbars (px).
    pub min_gutter_px: f64,
}

impl Default for PanelPolicyConfig {
    fn default() -> Self {
        Self {
            list_max_height_px: 250.0,
            list_min_height_px: 120.0,
            list_height_margin_px: 80.0,
            base_right_inset_px: 16.0,
            min_gutter_px: 14.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a navigator configuration.
#[derive(Debug)]
pub enum NavConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for NavConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for NavConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_overlay_constants() {
        let c = NavConfig::default();
        assert_eq!(c.scheduler.rebuild_debounce(), Duration::from_millis(200));
        assert_eq!(c.sync.manual_scroll_window(), Duration::from_millis(350));
        assert_eq!(c.list.tooltip_delay(), Duration::from_millis(1900));
        assert_eq!(c.sync.lead_in_px, 80.0);
        assert_eq!(c.sync.viewport_fraction, 0.25);
        assert_eq!(c.list.keep_visible_padding_px, 14.0);
        assert_eq!(c.list.title_max_chars, 80);
        assert_eq!(c.sync.jump_viewport, JumpViewportPolicy::Immediate);
    }

    #[test]
    fn default_resolver_round_trips() {
        assert_eq!(
            NavConfig::default().to_resolver_config(),
            ResolverConfig::default()
        );
    }

    #[test]
    fn default_is_valid() {
        assert!(NavConfig::default().validate().is_empty());
        assert!(NavConfig::default().validated().is_ok());
    }

    #[test]
    fn validation_reports_every_problem() {
        let mut c = NavConfig::default();
        c.scheduler.rebuild_debounce_ms = 0;
        c.sync.viewport_fraction = 1.5;
        c.sync.lead_in_px = -1.0;
        c.list.title_max_chars = 0;
        c.resolver.width_fraction = -0.1;
        c.panel.list_min_height_px = 400.0;
        let errors = c.validate();
        assert_eq!(errors.len(), 6, "{errors:?}");
        assert!(errors.iter().any(|e| e.contains("viewport_fraction")));
        assert!(errors.iter().any(|e| e.contains("width_fraction")));
    }

    #[test]
    fn settle_policy_needs_a_window() {
        let mut c = NavConfig::default();
        c.sync.jump_settle_ms = 0;
        assert!(c.validate().is_empty());
        c.sync.jump_viewport = JumpViewportPolicy::Settle;
        assert_eq!(c.validate().len(), 1);
    }

    #[test]
    fn validation_error_display_joins_messages() {
        let err = NavConfigError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "validation errors: a; b");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn partial_toml_keeps_defaults() {
        let c = NavConfig::from_toml_str(
            r#"
            [sync]
            lead_in_px = 96.0
            jump_viewport = "settle"
            "#,
        )
        .expect("valid toml");
        assert_eq!(c.sync.lead_in_px, 96.0);
        assert_eq!(c.sync.jump_viewport, JumpViewportPolicy::Settle);
        assert_eq!(c.sync.manual_scroll_window_ms, 350);
        assert_eq!(c.scheduler, SchedulerPolicyConfig::default());
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn malformed_json_is_a_json_error() {
        let err = NavConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, NavConfigError::Json(_)));
    }
}
