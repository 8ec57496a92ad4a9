//! The tap operator
//!
//! `Tap` holds a frozen configuration; `Tap::attach` wires one
//! subscription around a downstream consumer. Per subscription the
//! operator owns a fresh [`SingleObserverChannel`], fresh stage state,
//! and the primary pass-through link.
//!
//! # State machine
//!
//! ```text
//! Unattached ──attach──► Subscribed ──► { Completed | Errored | Unsubscribed }
//! ```
//!
//! Terminal states are final and mutually exclusive. All disposal paths
//! (explicit cancel, terminal notification, observer drop) converge on
//! the subscription's one-shot teardown, so the unsubscribe line fires
//! exactly once.
//!
//! # Failure isolation
//!
//! The side pipeline is the only place stage errors can surface. The
//! first error is logged as an instrumentation fault and poisons the
//! pipeline for the rest of the subscription; the primary stream keeps
//! flowing as if nothing happened.

use std::sync::Arc;

use tracing::debug;

use tapline_sinks::{Level, Logger};
use tapline_stream::{Notification, Observer, StreamError, Subscription};
use tapline_transform::{Chain, Message};

use crate::channel::SingleObserverChannel;
use crate::config::TapConfig;
use crate::render::Renderer;

#[cfg(test)]
#[path = "operator_test.rs"]
mod tests;

/// A reusable stream instrumentation operator
///
/// Attaching never shares state between subscriptions: every consumer
/// gets its own channel, stage instances, and lifecycle.
pub struct Tap<T> {
    config: Arc<TapConfig<T>>,
}

impl<T> Tap<T> {
    pub(crate) fn new(config: TapConfig<T>) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The frozen configuration behind this tap
    pub fn config(&self) -> &TapConfig<T> {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn into_config(self) -> Arc<TapConfig<T>> {
        self.config
    }
}

impl<T: Clone + Send + 'static> Tap<T> {
    /// Wire a subscription around a downstream consumer
    ///
    /// Builds the side pipeline, logs the subscribe message, and returns
    /// the upstream-facing observer. The producer drives the returned
    /// observer; the consumer cancels through
    /// [`TapObserver::subscription`].
    pub fn attach<D: Observer<T>>(&self, downstream: D) -> TapObserver<T, D> {
        let config = Arc::clone(&self.config);
        let logger = config.logger.clone();

        let mut pipeline = SidePipeline {
            chain: Chain::from_factories(&config.stages),
            renderer: Renderer::new(Arc::clone(&config)),
            logger: logger.clone(),
            failed: false,
        };
        let mut channel = SingleObserverChannel::new();
        let _ = channel.attach(Box::new(move |notification| {
            pipeline.observe(notification);
        }));

        if let Some(message) = &config.subscribed_message {
            logger.log(config.subscribed_level, message, None);
        }
        debug!(logger = logger.name(), "tap subscription attached");

        let subscription = Subscription::new();
        {
            let logger = logger.clone();
            let config = Arc::clone(&config);
            subscription.add(move || {
                if let Some(message) = &config.unsubscribed_message {
                    logger.log(config.unsubscribed_level, message, None);
                }
            });
        }

        TapObserver {
            downstream,
            channel,
            subscription,
            state: TapState::Subscribed,
        }
    }
}

impl<T> Clone for Tap<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
        }
    }
}

/// Lifecycle state of one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapState {
    /// Receiving notifications
    Subscribed,
    /// Terminated by completion
    Completed,
    /// Terminated by an upstream error
    Errored,
    /// Cancelled by the consumer before any terminal notification
    Unsubscribed,
}

/// One subscription: the upstream-facing observer of a tap
///
/// Forwards every notification to the downstream consumer exactly once
/// and mirrors it into the side channel.
pub struct TapObserver<T, D: Observer<T>> {
    downstream: D,
    channel: SingleObserverChannel<T>,
    subscription: Subscription,
    state: TapState,
}

impl<T, D: Observer<T>> TapObserver<T, D> {
    /// Cancellation handle for the consumer side
    pub fn subscription(&self) -> Subscription {
        self.subscription.clone()
    }

    /// Current lifecycle state
    pub fn state(&self) -> TapState {
        if self.state == TapState::Subscribed && self.subscription.is_unsubscribed() {
            TapState::Unsubscribed
        } else {
            self.state
        }
    }

    #[inline]
    fn active(&self) -> bool {
        self.state == TapState::Subscribed && !self.subscription.is_unsubscribed()
    }

    fn dispose(&mut self) {
        self.channel.detach();
        self.subscription.unsubscribe();
    }
}

impl<T: Clone + Send, D: Observer<T>> Observer<T> for TapObserver<T, D> {
    fn on_next(&mut self, value: T) {
        if !self.active() {
            return;
        }
        self.channel.push(Notification::Next(value.clone()));
        self.downstream.on_next(value);
    }

    fn on_error(&mut self, error: StreamError) {
        if !self.active() {
            return;
        }
        self.state = TapState::Errored;
        self.channel.push(Notification::Error(error.clone()));
        self.downstream.on_error(error);
        self.dispose();
    }

    fn on_completed(&mut self) {
        if !self.active() {
            return;
        }
        self.state = TapState::Completed;
        self.channel.push(Notification::Completed);
        self.downstream.on_completed();
        self.dispose();
    }
}

impl<T, D: Observer<T>> Drop for TapObserver<T, D> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}

/// The logging side of one subscription
struct SidePipeline<T> {
    chain: Chain<T>,
    renderer: Renderer<T>,
    logger: Logger,
    failed: bool,
}

impl<T> SidePipeline<T> {
    fn observe(&mut self, notification: Notification<T>) {
        if self.failed {
            return;
        }
        match self.chain.apply(Message::new(notification)) {
            Ok(Some(message)) => {
                if let Some(rendered) = self.renderer.render(&message) {
                    let error: Option<&(dyn std::error::Error + 'static)> =
                        match rendered.error.as_ref() {
                            Some(e) => Some(e.as_ref()),
                            None => None,
                        };
                    self.logger.log(rendered.level, &rendered.line, error);
                }
            }
            Ok(None) => {}
            Err(error) => {
                self.failed = true;
                self.logger.log(
                    Level::Error,
                    "logging transformations failed, side channel abandoned",
                    Some(&error),
                );
            }
        }
    }
}
