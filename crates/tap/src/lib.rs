//! Tapline Tap - stream instrumentation operator
//!
//! A [`Tap`] sits between a push-stream producer and its consumer. Every
//! notification is forwarded to the consumer unchanged and, as an
//! isolated side effect, duplicated into a single-observer side channel
//! where the configured stages annotate or thin it before the result is
//! rendered into one log line.
//!
//! # Architecture
//!
//! ```text
//! Producer ──► TapObserver ──────────────────► Downstream consumer
//!                   │
//!                   ▼
//!          SingleObserverChannel
//!                   │
//!                   ▼
//!        [Stage 1] → [Stage 2] → ...          (side channel)
//!                   │
//!                   ▼
//!               Renderer ──► Logger sink
//! ```
//!
//! # Guarantees
//!
//! - The consumer observes exactly the upstream sequence, whatever the
//!   side channel is configured to do.
//! - A stage failure is logged once as an instrumentation fault and
//!   abandons the side pipeline; the primary stream never notices.
//! - Unsubscription is one-shot: the unsubscribe line fires exactly once
//!   no matter how many paths (cancel, terminal, drop) converge on it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tapline_sinks::CaptureSink;
//! use tapline_stream::{Observer, ProbeObserver};
//!
//! let sink = CaptureSink::new();
//! let tap = tapline_tap::builder::<i32>()
//!     .sink(Arc::new(sink.clone()))
//!     .show_value()
//!     .show_count()
//!     .build();
//!
//! let probe = ProbeObserver::new();
//! let mut observer = tap.attach(probe.clone());
//! observer.on_next(7);
//! observer.on_completed();
//!
//! assert_eq!(probe.values(), vec![7]);
//! assert!(sink.lines().iter().any(|(_, m)| m == "7, count=1"));
//! ```

mod channel;
mod config;
mod error;
mod memory;
mod operator;
mod render;

pub use channel::SingleObserverChannel;
pub use config::{Builder, TapConfig, ValueFn};
pub use error::{Result, TapError};
pub use memory::memory_usage;
pub use operator::{Tap, TapObserver, TapState};

/// Start a builder with default configuration
pub fn builder<T>() -> Builder<T> {
    Builder::new()
}

/// Start a builder logging under the given name
pub fn logger<T>(name: impl Into<String>) -> Builder<T> {
    Builder::new().name(name)
}

/// A tap that logs every value under the default logger
///
/// Equivalent to `builder().show_value().build()`.
pub fn log<T: std::fmt::Display + 'static>() -> Tap<T> {
    Builder::new().show_value().build()
}
