//! Period sampling stage

use std::time::{Duration, Instant};

use crate::message::Message;
use crate::{Stage, StageResult};

#[cfg(test)]
#[path = "sample_test.rs"]
mod tests;

/// Thins value notifications to at most one per period, last value wins
///
/// The stage is driven purely by arrivals (it owns no timer thread): a
/// value arriving inside the current period replaces the held pending
/// value; a value arriving after the period closes it by emitting the
/// pending value, or itself when nothing is pending. A value still
/// pending when the stream terminates is not logged. Terminal
/// notifications always pass.
pub struct SampleStage<T> {
    period: Duration,
    window_end: Instant,
    pending: Option<Message<T>>,
}

impl<T> SampleStage<T> {
    /// Create a sampling stage with the given period
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            window_end: Instant::now(),
            pending: None,
        }
    }
}

impl<T: Send> Stage<T> for SampleStage<T> {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        if message.notification().is_terminal() {
            self.pending = None;
            return Ok(Some(message));
        }
        let now = Instant::now();
        if now >= self.window_end {
            self.window_end = now + self.period;
            match self.pending.take() {
                None => Ok(Some(message)),
                Some(previous) => {
                    self.pending = Some(message);
                    Ok(Some(previous))
                }
            }
        } else {
            self.pending = Some(message);
            Ok(None)
        }
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}
