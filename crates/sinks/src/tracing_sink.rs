//! Tracing-backed sink
//!
//! Dispatches rendered lines as `tracing` events, with the resolved
//! logger name attached as a structured field. Severity maps one-to-one
//! onto `tracing`'s levels.

use std::error::Error;

use crate::{Level, LogSink};

#[cfg(test)]
#[path = "tracing_sink_test.rs"]
mod tests;

/// Production sink dispatching through the `tracing` ecosystem
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn log(
        &self,
        name: &str,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        match (level, error) {
            (Level::Trace, None) => tracing::trace!(logger = name, "{message}"),
            (Level::Trace, Some(e)) => tracing::trace!(logger = name, error = %e, "{message}"),
            (Level::Debug, None) => tracing::debug!(logger = name, "{message}"),
            (Level::Debug, Some(e)) => tracing::debug!(logger = name, error = %e, "{message}"),
            (Level::Info, None) => tracing::info!(logger = name, "{message}"),
            (Level::Info, Some(e)) => tracing::info!(logger = name, error = %e, "{message}"),
            (Level::Warn, None) => tracing::warn!(logger = name, "{message}"),
            (Level::Warn, Some(e)) => tracing::warn!(logger = name, error = %e, "{message}"),
            (Level::Error, None) => tracing::error!(logger = name, "{message}"),
            (Level::Error, Some(e)) => tracing::error!(logger = name, error = %e, "{message}"),
        }
    }
}
