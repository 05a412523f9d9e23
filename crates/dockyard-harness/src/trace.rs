#![forbid(unsafe_code)]

//! JSONL frame trace.
//!
//! The [`Harness`](crate::Harness) records one [`FrameRecord`] per driver
//! step. Serialized as JSON lines the trace is diffable in CI and easy to
//! replay by eye when a scenario fails.

use serde::Serialize;

/// Dock state after one driver step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    /// Step counter.
    pub frame: u64,
    /// What the driver did (`"start"`, `"tick"`, `"accept"`, ...).
    pub step: &'static str,
    /// Simulated time since the harness was created, in microseconds.
    pub elapsed_us: u64,
    /// Items in slot order, debug-formatted.
    pub order: Vec<String>,
    /// Item being dragged, debug-formatted.
    pub active: Option<String>,
    /// Whether the session is anchored.
    pub session_active: bool,
    /// Items currently shifted aside.
    pub shifted: usize,
    /// Flights in the air.
    pub flights: usize,
    /// Frame subscriptions held by the host.
    pub subscriptions: usize,
    /// Overlay entries present in the host.
    pub overlays: usize,
    /// Dock revision.
    pub revision: u64,
}

impl FrameRecord {
    /// Serialize as a single JSON line.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Serialize a whole trace, one record per line.
#[must_use]
pub fn trace_to_jsonl(records: &[FrameRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_jsonl());
        out.push('\n');
    }
    out
}
