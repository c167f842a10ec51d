#![forbid(unsafe_code)]

//! A [`ViewportDriver`] that records every call.
//!
//! Scroll requests are recorded, not applied: the navigator does not own the
//! document, so a test decides when (and whether) a smooth scroll "lands" by
//! calling [`crate::settle_viewport`].
//!
//! # JSONL Schema
//!
//! ```json
//! {"event":"rebind","previous":null,"next":"window"}
//! {"event":"scroll_to","target":"element:2","anchor":5,"top":1120.0,"lead_in":80.0}
//! ```

use navrail_core::geometry::ScrollTarget;
use navrail_runtime::collaborators::{ScrollRequest, ViewportDriver};
use serde_json::json;

use crate::synthetic_document::NodeId;

/// One recorded driver call.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverEvent {
    /// The scroll listener moved.
    Rebind {
        /// Target the listener left (`None` on first bind).
        previous: Option<ScrollTarget<NodeId>>,
        /// Target the listener is now attached to.
        next: ScrollTarget<NodeId>,
    },
    /// A viewport scroll was requested.
    ScrollTo(ScrollRequest<NodeId>),
}

/// Records rebinds and scroll requests in call order.
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    events: Vec<DriverEvent>,
    listening: Option<ScrollTarget<NodeId>>,
}

impl RecordingDriver {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls.
    #[must_use]
    pub fn events(&self) -> &[DriverEvent] {
        &self.events
    }

    /// The target the scroll listener is attached to.
    #[must_use]
    pub fn listening(&self) -> Option<ScrollTarget<NodeId>> {
        self.listening
    }

    /// Every rebind, in order.
    pub fn rebinds(
        &self,
    ) -> impl Iterator<Item = (Option<ScrollTarget<NodeId>>, ScrollTarget<NodeId>)> + '_ {
        self.events.iter().filter_map(|e| match e {
            DriverEvent::Rebind { previous, next } => Some((*previous, *next)),
            DriverEvent::ScrollTo(_) => None,
        })
    }

    /// Every scroll request, in order.
    pub fn scroll_requests(&self) -> impl Iterator<Item = &ScrollRequest<NodeId>> + '_ {
        self.events.iter().filter_map(|e| match e {
            DriverEvent::ScrollTo(req) => Some(req),
            DriverEvent::Rebind { .. } => None,
        })
    }

    /// The most recent scroll request.
    #[must_use]
    pub fn last_request(&self) -> Option<ScrollRequest<NodeId>> {
        self.scroll_requests().last().copied()
    }

    /// Forget recorded calls, keeping the listener binding.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Render the recorded calls as JSON lines.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            let value = match event {
                DriverEvent::Rebind { previous, next } => json!({
                    "event": "rebind",
                    "previous": previous.map(|t| target_label(&t)),
                    "next": target_label(next),
                }),
                DriverEvent::ScrollTo(req) => json!({
                    "event": "scroll_to",
                    "target": target_label(&req.target),
                    "anchor": req.anchor,
                    "top": req.top,
                    "lead_in": req.lead_in,
                }),
            };
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}

fn target_label(target: &ScrollTarget<NodeId>) -> String {
    match target {
        ScrollTarget::Window => "window".to_owned(),
        ScrollTarget::Element(node) => format!("element:{node}"),
    }
}

impl ViewportDriver<NodeId> for RecordingDriver {
    fn rebind_scroll_listener(
        &mut self,
        previous: Option<&ScrollTarget<NodeId>>,
        next: &ScrollTarget<NodeId>,
    ) {
        tracing::trace!(message = "harness.rebind", next = %target_label(next));
        self.listening = Some(*next);
        self.events.push(DriverEvent::Rebind {
            previous: previous.copied(),
            next: *next,
        });
    }

    fn scroll_to(&mut self, request: ScrollRequest<NodeId>) {
        self.events.push(DriverEvent::ScrollTo(request));
    }
}
