//! Annotated side-channel message
//!
//! A `Message` is one materialized notification plus the comma-joined
//! annotation text accumulated by the stages it has passed through.
//! Appending returns a new message; nothing is mutated in place.

use tapline_stream::Notification;

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

/// One notification with accumulated annotation text
#[derive(Debug, Clone)]
pub struct Message<T> {
    notification: Notification<T>,
    annotation: String,
}

impl<T> Message<T> {
    /// Wrap a notification with no annotation yet
    pub fn new(notification: Notification<T>) -> Self {
        Self {
            notification,
            annotation: String::new(),
        }
    }

    /// The wrapped notification
    #[inline]
    pub fn notification(&self) -> &Notification<T> {
        &self.notification
    }

    /// The accumulated annotation text
    #[inline]
    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    /// Append annotation text, comma-delimited
    ///
    /// The separator is omitted when either side is empty.
    pub fn append(self, text: &str) -> Self {
        if text.is_empty() {
            return self;
        }
        let annotation = if self.annotation.is_empty() {
            text.to_string()
        } else {
            format!("{}, {}", self.annotation, text)
        };
        Self {
            notification: self.notification,
            annotation,
        }
    }
}
