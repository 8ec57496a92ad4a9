//! Rate measurement stages
//!
//! `RateStage` measures throughput over a bounded sliding window of recent
//! arrival instants. `RateSinceStartStage` measures overall throughput
//! since the first observed notification.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::message::Message;
use crate::{Stage, StageResult};

#[cfg(test)]
#[path = "rate_test.rs"]
mod tests;

/// Appends `label=<rate>` computed over the last `window` arrivals
///
/// The rate is events per `per` with three-decimal precision, computed
/// from the span of the window. Until the window holds `window` arrival
/// instants (and spans a nonzero interval) nothing is appended — a
/// half-filled window would report a misleading rate. Terminal
/// notifications pass through unannotated.
#[derive(Debug)]
pub struct RateStage {
    label: String,
    window: usize,
    per: Duration,
    times: VecDeque<Instant>,
}

impl RateStage {
    /// Create a rate stage over the last `window` arrivals, reported per `per`
    pub fn new(label: impl Into<String>, window: usize, per: Duration) -> Self {
        let window = window.max(2);
        Self {
            label: label.into(),
            window,
            per,
            times: VecDeque::with_capacity(window),
        }
    }
}

impl<T> Stage<T> for RateStage {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        if !message.notification().is_next() {
            return Ok(Some(message));
        }
        let now = Instant::now();
        if self.times.len() == self.window {
            self.times.pop_front();
        }
        self.times.push_back(now);

        if self.times.len() < self.window {
            return Ok(Some(message));
        }
        let span = now - *self.times.front().unwrap();
        if span.is_zero() {
            return Ok(Some(message));
        }
        let rate = self.times.len() as f64 / span.as_secs_f64() * self.per.as_secs_f64();
        let text = format!("{}={:.3}", self.label, rate);
        Ok(Some(message.append(&text)))
    }

    fn name(&self) -> &'static str {
        "rate"
    }
}

/// Appends `label=<rate>` as overall events per second since the start
///
/// The start instant is anchored at the first notification this stage
/// observes. Terminal notifications carry the last computed rate.
#[derive(Debug)]
pub struct RateSinceStartStage {
    label: String,
    count: u64,
    start: Option<Instant>,
    rate: f64,
}

impl RateSinceStartStage {
    /// Create a since-start rate stage with the given annotation label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
            start: None,
            rate: 0.0,
        }
    }
}

impl<T> Stage<T> for RateSinceStartStage {
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>> {
        let now = Instant::now();
        let start = *self.start.get_or_insert(now);
        if message.notification().is_next() {
            self.count += 1;
        }
        let elapsed = now - start;
        if !elapsed.is_zero() {
            self.rate = self.count as f64 / elapsed.as_secs_f64();
        }
        let text = format!("{}={:.3}", self.label, self.rate);
        Ok(Some(message.append(&text)))
    }

    fn name(&self) -> &'static str {
        "rate_since_start"
    }
}
