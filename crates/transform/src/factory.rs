//! Stage configuration factories
//!
//! `StageFactory` is the closed set of configurable stage kinds, held by
//! a frozen tap configuration. A factory builds a fresh stage instance —
//! with zeroed counters and empty history — for every subscription, which
//! is what keeps stage state subscription-scoped.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::count::CountStage;
use crate::every::{EveryDurationStage, EveryNStage};
use crate::rate::{RateSinceStartStage, RateStage};
use crate::sample::SampleStage;
use crate::when::{Predicate, PredicateStage};
use crate::window::WindowStage;
use crate::BoxStage;

#[cfg(test)]
#[path = "factory_test.rs"]
mod tests;

/// Shared builder for caller-supplied stages
pub type CustomStageFn<T> = Arc<dyn Fn() -> BoxStage<T> + Send + Sync>;

/// Closed set of configurable side-channel stages
///
/// Dispatch is a plain match; there is deliberately no open registry
/// here — callers needing behavior outside this set use [`StageFactory::Custom`].
pub enum StageFactory<T> {
    /// Append `label=<n>` counting value notifications
    Count {
        /// Annotation label
        label: String,
    },
    /// Pass every nth value
    EveryN {
        /// Modulo period
        n: u64,
    },
    /// Pass at most one value per elapsed interval
    EveryDuration {
        /// Minimum interval between passed values
        period: Duration,
    },
    /// Append a sliding-window throughput annotation
    Rate {
        /// Annotation label
        label: String,
        /// Number of arrival instants in the window
        window: usize,
        /// Time unit the rate is reported per
        per: Duration,
    },
    /// Append overall events-per-second since the first notification
    RateSinceStart {
        /// Annotation label
        label: String,
    },
    /// Pass values whose 1-based ordinal lies in the inclusive window
    Window {
        /// Lower bound, if any
        start: Option<u64>,
        /// Upper bound, if any
        finish: Option<u64>,
    },
    /// Pass values matching a predicate
    When {
        /// Value predicate
        predicate: Predicate<T>,
    },
    /// Thin values to at most one per period, last value wins
    Sample {
        /// Sampling period
        period: Duration,
    },
    /// Caller-supplied stage, built fresh per subscription
    Custom {
        /// Stage builder
        build: CustomStageFn<T>,
    },
}

impl<T: Send + 'static> StageFactory<T> {
    /// Build a fresh stage instance for one subscription
    pub fn build(&self) -> BoxStage<T> {
        match self {
            StageFactory::Count { label } => Box::new(CountStage::new(label.clone())),
            StageFactory::EveryN { n } => Box::new(EveryNStage::new(*n)),
            StageFactory::EveryDuration { period } => Box::new(EveryDurationStage::new(*period)),
            StageFactory::Rate { label, window, per } => {
                Box::new(RateStage::new(label.clone(), *window, *per))
            }
            StageFactory::RateSinceStart { label } => {
                Box::new(RateSinceStartStage::new(label.clone()))
            }
            StageFactory::Window { start, finish } => Box::new(WindowStage::new(*start, *finish)),
            StageFactory::When { predicate } => {
                Box::new(PredicateStage::new(Arc::clone(predicate)))
            }
            StageFactory::Sample { period } => Box::new(SampleStage::new(*period)),
            StageFactory::Custom { build } => build(),
        }
    }
}

impl<T> StageFactory<T> {
    /// Name of the stage kind this factory builds
    pub fn name(&self) -> &'static str {
        match self {
            StageFactory::Count { .. } => "count",
            StageFactory::EveryN { .. } => "every",
            StageFactory::EveryDuration { .. } => "every_duration",
            StageFactory::Rate { .. } => "rate",
            StageFactory::RateSinceStart { .. } => "rate_since_start",
            StageFactory::Window { .. } => "window",
            StageFactory::When { .. } => "when",
            StageFactory::Sample { .. } => "sample",
            StageFactory::Custom { .. } => "custom",
        }
    }
}

impl<T> Clone for StageFactory<T> {
    fn clone(&self) -> Self {
        match self {
            StageFactory::Count { label } => StageFactory::Count {
                label: label.clone(),
            },
            StageFactory::EveryN { n } => StageFactory::EveryN { n: *n },
            StageFactory::EveryDuration { period } => {
                StageFactory::EveryDuration { period: *period }
            }
            StageFactory::Rate { label, window, per } => StageFactory::Rate {
                label: label.clone(),
                window: *window,
                per: *per,
            },
            StageFactory::RateSinceStart { label } => StageFactory::RateSinceStart {
                label: label.clone(),
            },
            StageFactory::Window { start, finish } => StageFactory::Window {
                start: *start,
                finish: *finish,
            },
            StageFactory::When { predicate } => StageFactory::When {
                predicate: Arc::clone(predicate),
            },
            StageFactory::Sample { period } => StageFactory::Sample { period: *period },
            StageFactory::Custom { build } => StageFactory::Custom {
                build: Arc::clone(build),
            },
        }
    }
}

impl<T> fmt::Debug for StageFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageFactory")
            .field("kind", &self.name())
            .finish()
    }
}
