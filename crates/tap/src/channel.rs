//! Single-observer side channel
//!
//! The channel between the tap operator and its logging side pipeline.
//! It enforces a pure single-consumer contract matching the
//! one-subscription-per-tap-instance design:
//!
//! - At most one observer is ever attached. A second attach attempt is
//!   rejected by signalling an error notification to the late observer;
//!   the first attachment stays active and the primary stream never
//!   hears about the misuse.
//! - Delivery is synchronous on the pushing thread, in push order.
//! - Pushes before attachment, after the terminal notification, or after
//!   detach are silent no-ops.

use std::sync::Arc;

use tapline_stream::Notification;

use crate::error::{Result, TapError};

#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;

/// Observer callback attached to the channel
pub type ChannelObserver<T> = Box<dyn FnMut(Notification<T>) + Send>;

/// Event channel enforcing at most one active observer
pub struct SingleObserverChannel<T> {
    observer: Option<ChannelObserver<T>>,
    terminated: bool,
}

impl<T> SingleObserverChannel<T> {
    /// Create an unattached channel
    pub fn new() -> Self {
        Self {
            observer: None,
            terminated: false,
        }
    }

    /// Whether an observer is currently attached
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Whether a terminal notification has been pushed
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Attach the channel's observer
    ///
    /// A second attach is rejected: the late observer immediately
    /// receives `TapError::AlreadyAttached` as an error notification and
    /// the first attachment stays active.
    pub fn attach(&mut self, mut observer: ChannelObserver<T>) -> Result<()> {
        if self.observer.is_some() {
            tracing::warn!("rejecting second observer on single-observer channel");
            observer(Notification::Error(Arc::new(TapError::AlreadyAttached)));
            return Err(TapError::AlreadyAttached);
        }
        self.observer = Some(observer);
        Ok(())
    }

    /// Push a notification to the attached observer
    ///
    /// Synchronous, in order, and a silent no-op when no observer is
    /// attached or the channel is already terminated.
    pub fn push(&mut self, notification: Notification<T>) {
        if self.terminated {
            return;
        }
        let terminal = notification.is_terminal();
        if let Some(observer) = self.observer.as_mut() {
            observer(notification);
        }
        if terminal {
            self.terminated = true;
        }
    }

    /// Drop the attached observer; later pushes are silent no-ops
    pub fn detach(&mut self) {
        self.observer = None;
    }
}

impl<T> Default for SingleObserverChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SingleObserverChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleObserverChannel")
            .field("attached", &self.is_attached())
            .field("terminated", &self.terminated)
            .finish()
    }
}
