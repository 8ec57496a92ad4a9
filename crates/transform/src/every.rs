//! Ordinal and interval thinning stages
//!
//! `EveryNStage` keeps every nth value; `EveryDurationStage` keeps the
//! first value after each elapsed interval. Terminal notifications always
//! pass.

use std::time::{Duration, Instant};

use crate::message::Message;
use crate::{Stage, StageResult};

#[cfg(test)]
#[path = "every_test.rs"]
mod tests;

/// Passes every nth value notification (1-based modulo match)
#[derive(Debug)]
pub struct EveryNStage {
    n: u64,
    seen: u64,
}

impl EveryNStage {
    /// Create a stage passing every `n`th value
    pub fn new(n: u64) -> Self {
        Self { n: n.max(1), seen: 0 }
    }
}

impl<T> Stage<T> for EveryNStage {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        if !message.notification().is_next() {
            return Ok(Some(message));
        }
        self.seen += 1;
        if self.seen % self.n == 0 {
            Ok(Some(message))
        } else {
            Ok(None)
        }
    }

    fn name(&self) -> &'static str {
        "every"
    }
}

/// Passes the first value once the configured interval has elapsed
///
/// The first deadline starts at stage construction (subscription attach);
/// each passed value resets it.
#[derive(Debug)]
pub struct EveryDurationStage {
    period: Duration,
    deadline: Instant,
}

impl EveryDurationStage {
    /// Create a stage passing at most one value per `period`
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }
}

impl<T> Stage<T> for EveryDurationStage {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        if !message.notification().is_next() {
            return Ok(Some(message));
        }
        let now = Instant::now();
        if now >= self.deadline {
            self.deadline = now + self.period;
            Ok(Some(message))
        } else {
            Ok(None)
        }
    }

    fn name(&self) -> &'static str {
        "every_duration"
    }
}
