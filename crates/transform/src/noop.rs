//! Noop stage - pass-through stage for testing
//!
//! Useful for exercising chain infrastructure and measuring stage
//! overhead without any transformation logic in the way.

use crate::message::Message;
use crate::{Stage, StageResult};

/// A stage that passes messages through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStage;

impl NoopStage {
    /// Create a new noop stage
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<T> Stage<T> for NoopStage {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        Ok(Some(message))
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
