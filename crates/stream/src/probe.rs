//! Recording observer for tests
//!
//! `ProbeObserver` records every notification it receives. It is useful
//! for:
//! - Asserting pass-through behavior of operators wrapped around it
//! - Driving subscription lifecycle tests without a real consumer
//!
//! Clones share the same recording, so a test can hand one clone to an
//! operator and keep another for assertions.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::notification::{Notification, StreamError};
use crate::observer::Observer;

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;

/// Observer that records everything it receives
#[derive(Clone)]
pub struct ProbeObserver<T> {
    notifications: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T> ProbeObserver<T> {
    /// Create an empty probe
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of notifications received so far
    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    /// Whether nothing has been received yet
    pub fn is_empty(&self) -> bool {
        self.notifications.lock().is_empty()
    }

    /// Whether a terminal completion has been received
    pub fn completed(&self) -> bool {
        self.notifications
            .lock()
            .iter()
            .any(|n| n.is_completed())
    }

    /// Display text of the received terminal error, if any
    pub fn error_text(&self) -> Option<String> {
        self.notifications
            .lock()
            .iter()
            .find_map(|n| n.error().map(|e| e.to_string()))
    }
}

impl<T: Clone> ProbeObserver<T> {
    /// All notifications received so far
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.notifications.lock().clone()
    }

    /// The values received so far, in order
    pub fn values(&self) -> Vec<T> {
        self.notifications
            .lock()
            .iter()
            .filter_map(|n| n.value().cloned())
            .collect()
    }
}

impl<T> Default for ProbeObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> Observer<T> for ProbeObserver<T> {
    fn on_next(&mut self, value: T) {
        self.notifications.lock().push(Notification::Next(value));
    }

    fn on_error(&mut self, error: StreamError) {
        self.notifications.lock().push(Notification::Error(error));
    }

    fn on_completed(&mut self) {
        self.notifications.lock().push(Notification::Completed);
    }
}
