//! Tapline Sinks - leveled log dispatch
//!
//! The observation side of a tap ends in a [`LogSink`]: one call per
//! rendered line, carrying the logger name, a severity [`Level`], the
//! message text, and the terminal error when there is one.
//!
//! # Available Sinks
//!
//! | Sink | Purpose |
//! |------|---------|
//! | `tracing` | Production dispatch through the `tracing` ecosystem |
//! | `capture` | Records calls for deterministic test assertions |
//!
//! # Logger resolution
//!
//! A [`Logger`] binds a name to a sink. Taps resolve their logger once at
//! build time: explicit sink > explicit name on the process default sink >
//! the library default name. The process default sink can be installed
//! explicitly with [`set_default_sink`] and otherwise resolves lazily to
//! [`TracingSink`] on first use; passing a sink per tap keeps tests free
//! of process-wide state.

mod capture;
mod level;
mod logger;
mod tracing_sink;

pub use capture::{CaptureSink, CapturedLog};
pub use level::Level;
pub use logger::{default_sink, set_default_sink, Logger, DEFAULT_LOGGER_NAME};
pub use tracing_sink::TracingSink;

use std::error::Error;

/// Receiver of rendered log lines
///
/// Implementations must be cheap and non-blocking; sinks run on the
/// producer's delivering thread.
pub trait LogSink: Send + Sync {
    /// Dispatch one rendered line
    fn log(
        &self,
        name: &str,
        level: Level,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    );
}
