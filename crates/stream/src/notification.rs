//! Stream notifications
//!
//! A [`Notification`] is one event in a push stream: a value, a terminal
//! error, or a terminal completion. The error payload is reference-counted
//! so a single terminal error can flow through more than one channel
//! (primary consumer and observation side channel) without cloning the
//! underlying error.

use std::error::Error;
use std::sync::Arc;

#[cfg(test)]
#[path = "notification_test.rs"]
mod tests;

/// Shared error payload carried by a terminal error notification
pub type StreamError = Arc<dyn Error + Send + Sync + 'static>;

/// One event in a push stream
///
/// At most one terminal notification (`Error` or `Completed`) is ever
/// delivered per subscription, and nothing follows a terminal one. That
/// invariant is inherited from the producer and preserved, not
/// re-validated, by consumers of this type.
#[derive(Debug, Clone)]
pub enum Notification<T> {
    /// A stream value
    Next(T),
    /// Terminal error
    Error(StreamError),
    /// Terminal completion
    Completed,
}

/// Discriminant of a [`Notification`], for dispatch without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Next,
    Error,
    Completed,
}

impl<T> Notification<T> {
    /// Kind of this notification
    #[inline]
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Next(_) => NotificationKind::Next,
            Notification::Error(_) => NotificationKind::Error,
            Notification::Completed => NotificationKind::Completed,
        }
    }

    /// Whether this is a value notification
    #[inline]
    pub fn is_next(&self) -> bool {
        matches!(self, Notification::Next(_))
    }

    /// Whether this is a terminal error
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }

    /// Whether this is a terminal completion
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Notification::Completed)
    }

    /// Whether this notification terminates the stream
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.is_next()
    }

    /// The carried value, if this is a `Next`
    pub fn value(&self) -> Option<&T> {
        match self {
            Notification::Next(v) => Some(v),
            _ => None,
        }
    }

    /// The carried error, if this is an `Error`
    pub fn error(&self) -> Option<&StreamError> {
        match self {
            Notification::Error(e) => Some(e),
            _ => None,
        }
    }
}
