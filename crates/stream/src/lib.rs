//! Tapline Stream - push-stream protocol
//!
//! This crate defines the minimal protocol shared by every tapline
//! component: a producer pushes [`Notification`]s into an [`Observer`],
//! strictly serially, with at most one terminal notification per
//! subscription.
//!
//! # Contract
//!
//! - A producer never delivers two notifications to the same observer
//!   concurrently, and never delivers anything after a terminal
//!   notification. Components downstream rely on this contract instead of
//!   re-validating it.
//! - Cancellation is consumer-driven: a [`Subscription`] handle is
//!   one-shot and idempotent, and runs its teardown actions exactly once
//!   no matter how many paths race to unsubscribe.
//!
//! # Architecture
//!
//! ```text
//! Producer ──► Observer::on_next / on_error / on_completed
//!                  │
//!                  └── Subscription (cancel handle, teardown actions)
//! ```

mod notification;
mod observer;
mod probe;
mod subscription;

pub use notification::{Notification, NotificationKind, StreamError};
pub use observer::Observer;
pub use probe::ProbeObserver;
pub use subscription::Subscription;
