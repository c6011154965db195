//! # Diagnostic Sinks
//!
//! Every component reports its decisions (rule matched, year disambiguated,
//! string normalized) to a [`DiagnosticSink`]. Sinks observe only; nothing
//! they do feeds back into extraction.

use std::sync::Mutex;

/// Receiver for diagnostic messages emitted at each decision point.
pub trait DiagnosticSink: Send + Sync {
    /// Records one message from `component` (e.g. `"cascade"`, `"year"`).
    fn log(&self, component: &str, message: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn log(&self, _component: &str, _message: &str) {}
}

/// Forwards messages to `tracing` at debug level under the `marquee` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, component: &str, message: &str) {
        tracing::debug!(target: "marquee", component, "{message}");
    }
}

/// Keeps every message in memory, mostly useful in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded `(component, message)` pairs.
    pub fn entries(&self) -> Vec<(String, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns `true` if any message was recorded for `component`.
    pub fn saw(&self, component: &str) -> bool {
        self.entries().iter().any(|(c, _)| c == component)
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, component: &str, message: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((component.to_string(), message.to_string()));
    }
}
