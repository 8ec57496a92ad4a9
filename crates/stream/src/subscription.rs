//! Subscription handle with one-shot teardown
//!
//! A [`Subscription`] is the consumer-side cancellation handle for one
//! stream attachment. Unsubscription is one-shot and idempotent: teardown
//! actions run exactly once even when several paths (explicit cancel,
//! terminal notification, cleanup after an internal failure) converge on
//! the same handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

#[cfg(test)]
#[path = "subscription_test.rs"]
mod tests;

type Action = Box<dyn FnOnce() + Send>;

/// Cancellation handle for one stream attachment
///
/// Cheap to clone; all clones share the same unsubscribed flag and
/// teardown actions.
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<Inner>,
}

struct Inner {
    unsubscribed: AtomicBool,
    actions: Mutex<Vec<Action>>,
}

impl Subscription {
    /// Create a live subscription with no teardown actions yet
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                unsubscribed: AtomicBool::new(false),
                actions: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Whether this subscription has been cancelled
    #[inline]
    pub fn is_unsubscribed(&self) -> bool {
        self.inner.unsubscribed.load(Ordering::Acquire)
    }

    /// Register a teardown action
    ///
    /// Runs on unsubscribe. If the subscription is already unsubscribed
    /// the action runs immediately on the calling thread.
    pub fn add<F: FnOnce() + Send + 'static>(&self, action: F) {
        if self.is_unsubscribed() {
            action();
            return;
        }
        let mut actions = self.inner.actions.lock();
        // Re-check under the lock so an action can never be dropped by a
        // racing unsubscribe.
        if self.inner.unsubscribed.load(Ordering::Acquire) {
            drop(actions);
            action();
        } else {
            actions.push(Box::new(action));
        }
    }

    /// Cancel the subscription, running teardown actions exactly once
    pub fn unsubscribe(&self) {
        let mut actions = self.inner.actions.lock();
        if self
            .inner
            .unsubscribed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }
        let drained: Vec<Action> = actions.drain(..).collect();
        drop(actions);
        for action in drained {
            action();
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("unsubscribed", &self.is_unsubscribed())
            .finish()
    }
}
