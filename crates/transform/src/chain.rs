//! Stage chain - sequential message transformation
//!
//! The `Chain` applies the configured stages in order to each message
//! flowing through the side channel.
//!
//! # Design
//!
//! - **Sequential execution**: stages run in configuration order, each
//!   receiving the output of the previous
//! - **Suppression short-circuits**: once a stage returns `None` the
//!   remaining stages do not see the message
//! - **Fail-fast**: the first stage error stops the chain for that
//!   message and is surfaced to the caller

use crate::message::Message;
use crate::{BoxStage, StageFactory, StageResult};

#[cfg(test)]
#[path = "chain_test.rs"]
mod tests;

/// Ordered chain of side-channel stages
pub struct Chain<T> {
    stages: Vec<BoxStage<T>>,
}

impl<T> Chain<T> {
    /// Create a chain from already-built stages
    pub fn new(stages: Vec<BoxStage<T>>) -> Self {
        Self { stages }
    }

    /// Create an empty chain (pass-through)
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Number of stages in the chain
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no stages
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Names of the stages, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run a message through all stages in order
    ///
    /// Returns `Ok(None)` if any stage suppressed the message, and the
    /// first stage error otherwise encountered.
    pub fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        let mut current = message;
        for stage in &mut self.stages {
            match stage.apply(current)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}

impl<T: Send + 'static> Chain<T> {
    /// Build a chain with fresh stage state from configured factories
    ///
    /// Called once per subscription so no counter or timestamp window is
    /// ever shared between subscriptions.
    pub fn from_factories(factories: &[StageFactory<T>]) -> Self {
        Self {
            stages: factories.iter().map(|f| f.build()).collect(),
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::empty()
    }
}
