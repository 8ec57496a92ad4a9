//! Logger identity and the process default sink
//!
//! A `Logger` binds a name to a sink; both are resolved once when a tap
//! configuration is frozen. The process default sink lives in a
//! `OnceLock`: install it explicitly with [`set_default_sink`] before
//! first use, or let it resolve lazily to [`TracingSink`].

use std::error::Error;
use std::sync::{Arc, OnceLock};

use crate::tracing_sink::TracingSink;
use crate::{Level, LogSink};

#[cfg(test)]
#[path = "logger_test.rs"]
mod tests;

/// Logger name used when neither a sink nor a name is configured
pub const DEFAULT_LOGGER_NAME: &str = "tapline";

static DEFAULT_SINK: OnceLock<Arc<dyn LogSink>> = OnceLock::new();

/// Install the process-wide default sink
///
/// Returns `false` if a default sink was already resolved (explicitly or
/// lazily); the existing sink stays in place.
pub fn set_default_sink(sink: Arc<dyn LogSink>) -> bool {
    DEFAULT_SINK.set(sink).is_ok()
}

/// The process-wide default sink, resolving to [`TracingSink`] on first use
pub fn default_sink() -> Arc<dyn LogSink> {
    Arc::clone(DEFAULT_SINK.get_or_init(|| Arc::new(TracingSink::new())))
}

/// A named handle onto a sink
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Bind a name to an explicit sink
    pub fn new(name: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into().into(),
            sink,
        }
    }

    /// Bind a name to the process default sink
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, default_sink())
    }

    /// The bound logger name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dispatch one line through the bound sink
    pub fn log(&self, level: Level, message: &str, error: Option<&(dyn Error + 'static)>) {
        self.sink.log(&self.name, level, message, error);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}
