//! Predicate filter stage

use std::sync::Arc;

use crate::message::Message;
use crate::{Stage, StageResult};

#[cfg(test)]
#[path = "when_test.rs"]
mod tests;

/// Shared value predicate
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Suppresses value notifications whose value fails the predicate
///
/// Terminal notifications always pass.
pub struct PredicateStage<T> {
    predicate: Predicate<T>,
}

impl<T> PredicateStage<T> {
    /// Create a predicate stage
    pub fn new(predicate: Predicate<T>) -> Self {
        Self { predicate }
    }
}

impl<T: Send> Stage<T> for PredicateStage<T> {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        match message.notification().value() {
            Some(value) if !(self.predicate)(value) => Ok(None),
            _ => Ok(Some(message)),
        }
    }

    fn name(&self) -> &'static str {
        "when"
    }
}
