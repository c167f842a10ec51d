#![forbid(unsafe_code)]

//! Optional structured logging.
//!
//! With the `tracing` feature the usual macros are re-exported here so
//! downstream crates can log through `navrail_core` without a direct
//! dependency. With `tracing-json` a JSON subscriber can be installed for
//! production hosts.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber is already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}
