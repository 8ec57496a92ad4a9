//! Tap configuration and its fluent builder
//!
//! The builder is the whole configuration surface of a tap. Calling
//! [`Builder::build`] freezes the options into a [`TapConfig`] the
//! operator consumes; nothing about a tap can change after that point.
//! Stage options record factories, not instances — stage state is built
//! fresh for every subscription.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tapline_sinks::{Level, LogSink, Logger, DEFAULT_LOGGER_NAME};
use tapline_transform::{BoxStage, StageFactory};

use crate::operator::Tap;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Value extraction function applied before rendering
pub type ValueFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Frozen configuration of one tap
pub struct TapConfig<T> {
    pub(crate) logger: Logger,
    pub(crate) subscribed_message: Option<String>,
    pub(crate) subscribed_level: Level,
    pub(crate) unsubscribed_message: Option<String>,
    pub(crate) unsubscribed_level: Level,
    pub(crate) completed_message: Option<String>,
    pub(crate) completed_level: Level,
    pub(crate) log_on_next: bool,
    pub(crate) on_next_level: Level,
    pub(crate) on_next_template: Option<String>,
    pub(crate) log_on_error: bool,
    pub(crate) on_error_level: Level,
    pub(crate) on_error_template: Option<String>,
    pub(crate) value_fn: Option<ValueFn<T>>,
    pub(crate) stages: Vec<StageFactory<T>>,
    pub(crate) show_memory: bool,
    pub(crate) show_stack_trace: bool,
}

impl<T> TapConfig<T> {
    /// The resolved logger this tap dispatches through
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// The configured stage factories, in order
    pub fn stages(&self) -> &[StageFactory<T>] {
        &self.stages
    }
}

impl<T> fmt::Debug for TapConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapConfig")
            .field("logger", &self.logger)
            .field("stages", &self.stages)
            .field("log_on_next", &self.log_on_next)
            .field("log_on_error", &self.log_on_error)
            .finish()
    }
}

/// Fluent builder for a [`Tap`]
///
/// Defaults mirror what an unconfigured tap logs: `onSubscribe` and
/// `onUnsubscribe` at DEBUG, `onCompleted` at INFO, values at INFO with
/// no value text until value display is enabled, errors at ERROR.
pub struct Builder<T> {
    sink: Option<Arc<dyn LogSink>>,
    name: Option<String>,
    subscribed_message: Option<String>,
    subscribed_level: Level,
    unsubscribed_message: Option<String>,
    unsubscribed_level: Level,
    completed_message: Option<String>,
    completed_level: Level,
    log_on_next: bool,
    on_next_level: Level,
    on_next_template: Option<String>,
    log_on_error: bool,
    on_error_level: Level,
    on_error_template: Option<String>,
    value_fn: Option<ValueFn<T>>,
    stages: Vec<StageFactory<T>>,
    show_memory: bool,
    show_stack_trace: bool,
}

impl<T> Builder<T> {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self {
            sink: None,
            name: None,
            subscribed_message: Some("onSubscribe".to_string()),
            subscribed_level: Level::Debug,
            unsubscribed_message: Some("onUnsubscribe".to_string()),
            unsubscribed_level: Level::Debug,
            completed_message: Some("onCompleted".to_string()),
            completed_level: Level::Info,
            log_on_next: true,
            on_next_level: Level::Info,
            on_next_template: None,
            log_on_error: true,
            on_error_level: Level::Error,
            on_error_template: None,
            value_fn: None,
            stages: Vec::new(),
            show_memory: false,
            show_stack_trace: false,
        }
    }

    // ------------------------------------------------------------------
    // Logger selection
    // ------------------------------------------------------------------

    /// Log through an explicit sink instead of the process default
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Name the logger lines are dispatched under
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name the logger after a type, as in `for_type::<MyComponent>()`
    pub fn for_type<C>(self) -> Self {
        self.name(std::any::type_name::<C>())
    }

    // ------------------------------------------------------------------
    // Lifecycle messages
    // ------------------------------------------------------------------

    /// Message logged when a consumer subscribes
    pub fn subscribed(mut self, message: impl Into<String>) -> Self {
        self.subscribed_message = Some(message.into());
        self
    }

    /// Level of the subscribe message
    pub fn subscribed_level(mut self, level: Level) -> Self {
        self.subscribed_level = level;
        self
    }

    /// Message logged when the subscription is disposed
    pub fn unsubscribed(mut self, message: impl Into<String>) -> Self {
        self.unsubscribed_message = Some(message.into());
        self
    }

    /// Level of the unsubscribe message
    pub fn unsubscribed_level(mut self, level: Level) -> Self {
        self.unsubscribed_level = level;
        self
    }

    /// Message logged on stream completion
    pub fn on_completed(mut self, message: impl Into<String>) -> Self {
        self.completed_message = Some(message.into());
        self
    }

    /// Level of the completion message
    pub fn on_completed_level(mut self, level: Level) -> Self {
        self.completed_level = level;
        self
    }

    // ------------------------------------------------------------------
    // Per-kind rendering
    // ------------------------------------------------------------------

    /// Enable or disable logging of value notifications
    pub fn on_next(mut self, enabled: bool) -> Self {
        self.log_on_next = enabled;
        self
    }

    /// Level value lines are logged at
    pub fn on_next_level(mut self, level: Level) -> Self {
        self.on_next_level = level;
        self
    }

    /// Enable or disable logging of error notifications
    pub fn on_error(mut self, enabled: bool) -> Self {
        self.log_on_error = enabled;
        self
    }

    /// Level error lines are logged at
    pub fn on_error_level(mut self, level: Level) -> Self {
        self.on_error_level = level;
        self
    }

    /// Template for error lines; `{}` is replaced by the error text
    pub fn on_error_format(mut self, template: impl Into<String>) -> Self {
        self.on_error_template = Some(template.into());
        self
    }

    /// Prefix prepended to the error text on error lines
    pub fn on_error_prefix(self, prefix: impl Into<String>) -> Self {
        let template = format!("{}{{}}", prefix.into());
        self.on_error_format(template)
    }

    /// Drop the value text from value lines, keeping only annotations
    pub fn exclude_value(mut self) -> Self {
        self.on_next_template = None;
        self
    }

    // ------------------------------------------------------------------
    // Stages
    // ------------------------------------------------------------------

    /// Append a stage factory to the side-channel chain
    pub fn stage(mut self, factory: StageFactory<T>) -> Self {
        self.stages.push(factory);
        self
    }

    /// Count values, annotating `label=<n>`
    pub fn count(self, label: impl Into<String>) -> Self {
        self.stage(StageFactory::Count {
            label: label.into(),
        })
    }

    /// Count values under the default `count` label
    pub fn show_count(self) -> Self {
        self.count("count")
    }

    /// Log only every nth value
    ///
    /// Values of `n` below two are the identity and add no stage.
    pub fn every(self, n: u64) -> Self {
        if n > 1 {
            self.stage(StageFactory::EveryN { n })
        } else {
            self
        }
    }

    /// Log at most one value per elapsed interval
    pub fn every_duration(self, period: Duration) -> Self {
        self.stage(StageFactory::EveryDuration { period })
    }

    /// Annotate throughput over the last `window` values, per `per`
    pub fn rate(self, label: impl Into<String>, window: usize, per: Duration) -> Self {
        self.stage(StageFactory::Rate {
            label: label.into(),
            window,
            per,
        })
    }

    /// Annotate overall events per second since the first notification
    pub fn rate_since_start(self, label: impl Into<String>) -> Self {
        self.stage(StageFactory::RateSinceStart {
            label: label.into(),
        })
    }

    /// Log only values with 1-based ordinal in `[start, finish]`
    pub fn window(self, start: u64, finish: u64) -> Self {
        self.stage(StageFactory::Window {
            start: Some(start),
            finish: Some(finish),
        })
    }

    /// Log only values from ordinal `start` onwards
    pub fn start(self, start: u64) -> Self {
        self.stage(StageFactory::Window {
            start: Some(start),
            finish: None,
        })
    }

    /// Log only values up to ordinal `finish`
    pub fn finish(self, finish: u64) -> Self {
        self.stage(StageFactory::Window {
            start: None,
            finish: Some(finish),
        })
    }

    /// Log only values matching the predicate
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.stage(StageFactory::When {
            predicate: Arc::new(predicate),
        })
    }

    /// Thin values to at most one per period, last value wins
    pub fn sample(self, period: Duration) -> Self {
        self.stage(StageFactory::Sample { period })
    }

    /// Apply a caller-supplied stage, built fresh per subscription
    pub fn to<F>(self, build: F) -> Self
    where
        F: Fn() -> BoxStage<T> + Send + Sync + 'static,
    {
        self.stage(StageFactory::Custom {
            build: Arc::new(build),
        })
    }

    // ------------------------------------------------------------------
    // Extras
    // ------------------------------------------------------------------

    /// Append memory usage text to every rendered line
    pub fn show_memory(mut self) -> Self {
        self.show_memory = true;
        self
    }

    /// Append a captured backtrace to value lines
    pub fn show_stack_trace(mut self) -> Self {
        self.show_stack_trace = true;
        self
    }

    /// Freeze the configuration into a reusable tap
    pub fn build(self) -> Tap<T> {
        let name = self
            .name
            .unwrap_or_else(|| DEFAULT_LOGGER_NAME.to_string());
        let logger = match self.sink {
            Some(sink) => Logger::new(name, sink),
            None => Logger::named(name),
        };
        Tap::new(TapConfig {
            logger,
            subscribed_message: self.subscribed_message,
            subscribed_level: self.subscribed_level,
            unsubscribed_message: self.unsubscribed_message,
            unsubscribed_level: self.unsubscribed_level,
            completed_message: self.completed_message,
            completed_level: self.completed_level,
            log_on_next: self.log_on_next,
            on_next_level: self.on_next_level,
            on_next_template: self.on_next_template,
            log_on_error: self.log_on_error,
            on_error_level: self.on_error_level,
            on_error_template: self.on_error_template,
            value_fn: self.value_fn,
            stages: self.stages,
            show_memory: self.show_memory,
            show_stack_trace: self.show_stack_trace,
        })
    }
}

impl<T: std::fmt::Display + 'static> Builder<T> {
    /// Render values through their `Display` impl
    pub fn show_value(mut self) -> Self {
        if self.on_next_template.is_none() {
            self.on_next_template = Some("{}".to_string());
        }
        self.ensure_value_fn()
    }

    /// Template for value lines; `{}` is replaced by the value text
    pub fn on_next_format(mut self, template: impl Into<String>) -> Self {
        self.on_next_template = Some(template.into());
        self.ensure_value_fn()
    }

    /// Prefix prepended to the value text on value lines
    pub fn on_next_prefix(self, prefix: impl Into<String>) -> Self {
        let template = format!("{}{{}}", prefix.into());
        self.on_next_format(template)
    }

    /// Prefix both value and error lines
    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.on_next_prefix(prefix.clone()).on_error_prefix(prefix)
    }

    fn ensure_value_fn(mut self) -> Self {
        if self.value_fn.is_none() {
            self.value_fn = Some(Arc::new(|value: &T| value.to_string()));
        }
        self
    }
}

impl<T: 'static> Builder<T> {
    /// Extract the rendered value through a custom function
    pub fn value<F, S>(mut self, extract: F) -> Self
    where
        F: Fn(&T) -> S + Send + Sync + 'static,
        S: std::fmt::Display,
    {
        self.value_fn = Some(Arc::new(move |value: &T| extract(value).to_string()));
        self
    }
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}
