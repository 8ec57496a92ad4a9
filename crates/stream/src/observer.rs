//! The observer side of a push stream

use crate::notification::{Notification, StreamError};

/// Receiver of pushed stream events
///
/// Implementors are driven by a single producer at a time: calls arrive
/// strictly serially and nothing arrives after `on_error` or
/// `on_completed`.
pub trait Observer<T>: Send {
    /// Receive a stream value
    fn on_next(&mut self, value: T);

    /// Receive the terminal error
    fn on_error(&mut self, error: StreamError);

    /// Receive the terminal completion
    fn on_completed(&mut self);

    /// Dispatch a materialized notification to the matching handler
    fn on_notification(&mut self, notification: Notification<T>) {
        match notification {
            Notification::Next(v) => self.on_next(v),
            Notification::Error(e) => self.on_error(e),
            Notification::Completed => self.on_completed(),
        }
    }
}

impl<T> Observer<T> for Box<dyn Observer<T>> {
    fn on_next(&mut self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&mut self, error: StreamError) {
        (**self).on_error(error);
    }

    fn on_completed(&mut self) {
        (**self).on_completed();
    }
}
