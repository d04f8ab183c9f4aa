//! Hook recorder for asserting on validator/observer traffic.

use opentui_textarea::{Position, TextArea};
use std::sync::{Arc, Mutex};

/// One hook invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookCall {
    Moved { from: Position, to: Position },
    Boundary { attempted: Position, reason: String },
}

/// Collects cursor-moved and boundary-hit calls from a `TextArea`.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<HookCall>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register both observers on `area`.
    pub fn attach(&self, area: &TextArea) -> TextArea {
        let moved = Arc::clone(&self.calls);
        let boundary = Arc::clone(&self.calls);
        area.with_cursor_observer(move |from: Position, to: Position| {
            moved.lock().unwrap().push(HookCall::Moved { from, to });
        })
        .with_boundary_observer(move |attempted: Position, reason: &str| {
            boundary.lock().unwrap().push(HookCall::Boundary {
                attempted,
                reason: reason.to_string(),
            });
        })
    }

    pub fn calls(&self) -> Vec<HookCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn boundary_hits(&self) -> Vec<(Position, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HookCall::Boundary { attempted, reason } => Some((attempted, reason)),
                HookCall::Moved { .. } => None,
            })
            .collect()
    }

    pub fn moves(&self) -> Vec<(Position, Position)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                HookCall::Moved { from, to } => Some((from, to)),
                HookCall::Boundary { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}
