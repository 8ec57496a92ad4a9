//! Ordinal window stage

use crate::message::Message;
use crate::{Stage, StageResult};

#[cfg(test)]
#[path = "window_test.rs"]
mod tests;

/// Passes value notifications whose 1-based ordinal lies in the window
///
/// Bounds are inclusive and each is optional, so `start`-only and
/// `finish`-only windows are expressible. Terminal notifications always
/// pass.
#[derive(Debug)]
pub struct WindowStage {
    start: Option<u64>,
    finish: Option<u64>,
    seen: u64,
}

impl WindowStage {
    /// Create a window over the inclusive ordinal range `[start, finish]`
    pub fn new(start: Option<u64>, finish: Option<u64>) -> Self {
        Self {
            start,
            finish,
            seen: 0,
        }
    }

    /// Window starting at ordinal `start` with no upper bound
    pub fn from_start(start: u64) -> Self {
        Self::new(Some(start), None)
    }

    /// Window ending at ordinal `finish`, starting from the first value
    pub fn to_finish(finish: u64) -> Self {
        Self::new(None, Some(finish))
    }
}

impl<T> Stage<T> for WindowStage {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        if !message.notification().is_next() {
            return Ok(Some(message));
        }
        self.seen += 1;
        let after_start = self.start.map_or(true, |s| self.seen >= s);
        let before_finish = self.finish.map_or(true, |f| self.seen <= f);
        if after_start && before_finish {
            Ok(Some(message))
        } else {
            Ok(None)
        }
    }

    fn name(&self) -> &'static str {
        "window"
    }
}
