#![forbid(unsafe_code)]

//! Navrail Harness
//!
//! Deterministic stand-ins for everything a browser host provides, so the
//! navigator can be driven end to end without a DOM.
//!
//! # Key Components
//!
//! - [`SyntheticDocument`] - Geometry-table layout tree with scrollable nodes
//! - [`RecordingDriver`] - Records scroll-listener rebinds and viewport scrolls
//! - [`RecordingPresenter`] - Simulated side list with real scroll extents
//! - [`TestNavigator`] - A navigator wired to all of the above and a
//!   [`DeterministicClock`]
//!
//! # Usage
//!
//! ```
//! use navrail_harness::{chat_navigator, frame, settle_viewport};
//! use navrail_runtime::NavConfig;
//!
//! let mut nav = chat_navigator(&[0.0, 500.0, 1200.0, 2000.0], NavConfig::default());
//! nav.jump_to(2);
//! settle_viewport(&mut nav);
//! frame(&mut nav);
//! assert_eq!(nav.active_index(), Some(2));
//! ```

pub mod recording_driver;
pub mod recording_presenter;
pub mod synthetic_document;

use core::time::Duration;

use navrail_core::clock::{DeterministicClock, MonotonicClock};
use navrail_runtime::{NavConfig, Navigator};

pub use recording_driver::{DriverEvent, RecordingDriver};
pub use recording_presenter::RecordingPresenter;
pub use synthetic_document::{NodeId, SyntheticDocument};

/// A navigator over the synthetic collaborators.
pub type TestNavigator =
    Navigator<SyntheticDocument, RecordingDriver, RecordingPresenter, DeterministicClock>;

/// Build and boot a navigator over `document`.
#[must_use]
pub fn navigator_for(document: SyntheticDocument, config: NavConfig) -> TestNavigator {
    let mut nav = Navigator::new(
        config,
        document,
        RecordingDriver::new(),
        RecordingPresenter::new(),
        DeterministicClock::new(),
    );
    nav.boot();
    nav
}

/// Boot a navigator over a chat layout whose transcript scrolls in an
/// inner container.
#[must_use]
pub fn chat_navigator(tops: &[f64], config: NavConfig) -> TestNavigator {
    navigator_for(SyntheticDocument::chat(tops).0, config)
}

/// Boot a navigator over a transcript that scrolls the window.
#[must_use]
pub fn windowed_navigator(tops: &[f64], config: NavConfig) -> TestNavigator {
    navigator_for(SyntheticDocument::windowed(tops).0, config)
}

/// Land the most recent viewport scroll request and report the scroll.
///
/// Returns `false` when no scroll was requested.
pub fn settle_viewport(nav: &mut TestNavigator) -> bool {
    let Some(request) = nav.driver().last_request() else {
        return false;
    };
    nav.driver_mut().clear();
    nav.document_mut().set_scroll(request.target, request.top);
    nav.on_scroll();
    true
}

/// Scroll the bound container (as the user would) and report it.
pub fn user_scroll(nav: &mut TestNavigator, top: f64) {
    let Some(target) = nav.scroll_context().map(|c| *c.target()) else {
        return;
    };
    nav.document_mut().set_scroll(target, top);
    nav.on_scroll();
}

/// Deliver one animation frame if the navigator asked for it.
pub fn frame(nav: &mut TestNavigator) -> bool {
    if !nav.wants_frame() {
        return false;
    }
    nav.on_animation_frame();
    true
}

/// Advance the clock by `dt`, firing every timer that comes due on the way.
///
/// Returns the number of timer callbacks delivered.
pub fn advance(nav: &mut TestNavigator, dt: Duration) -> usize {
    let end = nav.clock_mut().now_mono().saturating_add(dt);
    let mut fired = 0;
    while let Some(deadline) = nav.next_deadline() {
        if deadline > end {
            break;
        }
        nav.clock_mut().set(deadline);
        nav.on_timer();
        fired += 1;
    }
    nav.clock_mut().set(end);
    fired
}

/// [`advance`] by whole milliseconds.
pub fn advance_ms(nav: &mut TestNavigator, ms: u64) -> usize {
    advance(nav, Duration::from_millis(ms))
}
