//! Capturing sink for tests
//!
//! `CaptureSink` records every dispatched line so tests can assert the
//! exact sequence of (level, message) calls a tap produced. Clones share
//! the same buffer.

use std::error::Error;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Level, LogSink};

#[cfg(test)]
#[path = "capture_test.rs"]
mod tests;

/// One recorded log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLog {
    /// Logger name the line was dispatched under
    pub name: String,
    /// Severity
    pub level: Level,
    /// Rendered message text
    pub message: String,
    /// Display text of the attached error, if any
    pub error: Option<String>,
}

/// Sink that records calls for deterministic assertions
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<CapturedLog>>>,
}

impl CaptureSink {
    /// Create an empty capture sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls so far, in dispatch order
    pub fn records(&self) -> Vec<CapturedLog> {
        self.records.lock().clone()
    }

    /// The recorded (level, message) pairs, for compact assertions
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .iter()
            .map(|r| (r.level, r.message.clone()))
            .collect()
    }

    /// Number of recorded calls
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drop all recorded calls
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for CaptureSink {
    fn log(
        &self,
        name: &str,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.records.lock().push(CapturedLog {
            name: name.to_string(),
            level,
            message: message.to_string(),
            error: error.map(|e| e.to_string()),
        });
    }
}
