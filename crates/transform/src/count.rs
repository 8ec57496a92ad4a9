//! Count stage

use crate::message::Message;
use crate::{Stage, StageResult};

#[cfg(test)]
#[path = "count_test.rs"]
mod tests;

/// Appends `label=<n>` where n increments once per value notification
///
/// Terminal notifications carry the final count unchanged, so a completion
/// line reports how many values the subscription saw.
#[derive(Debug)]
pub struct CountStage {
    label: String,
    count: u64,
}

impl CountStage {
    /// Create a count stage with the given annotation label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
        }
    }
}

impl<T> Stage<T> for CountStage {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        if message.notification().is_next() {
            self.count += 1;
        }
        let text = format!("{}={}", self.label, self.count);
        Ok(Some(message.append(&text)))
    }

    fn name(&self) -> &'static str {
        "count"
    }
}
