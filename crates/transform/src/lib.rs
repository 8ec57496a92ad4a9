//! Tapline Transform - side-channel stage library
//!
//! Stages annotate and thin the duplicated notification stream flowing
//! through a tap's side channel. They never see, let alone touch, the
//! primary stream.
//!
//! # Overview
//!
//! A [`Message`] pairs one notification with the annotation text
//! accumulated so far. Each [`Stage`] either passes a message on (possibly
//! with more annotation), suppresses it, or fails; the [`Chain`] runs the
//! configured stages in order.
//!
//! # Design Principles
//!
//! - **Subscription-scoped state**: stage instances are built fresh from
//!   [`StageFactory`] entries at attach time, so re-subscribing always
//!   starts from zero counts and zero history.
//! - **Terminals always pass**: filtering stages only ever suppress value
//!   notifications, so completion and error logging cannot be starved by
//!   an upstream filter.
//! - **Fail-fast**: the first stage error aborts the message and surfaces
//!   to the side-pipeline boundary, where it is contained.
//!
//! # Architecture
//!
//! ```text
//! [Message] → [Stage 1] → [Stage 2] → ... → [Message']   (or suppressed)
//! ```

mod chain;
mod count;
mod error;
mod every;
mod factory;
mod message;
mod noop;
mod rate;
mod sample;
mod when;
mod window;

pub use chain::Chain;
pub use count::CountStage;
pub use error::StageError;
pub use every::{EveryDurationStage, EveryNStage};
pub use factory::{CustomStageFn, StageFactory};
pub use message::Message;
pub use noop::NoopStage;
pub use rate::{RateSinceStartStage, RateStage};
pub use sample::SampleStage;
pub use when::{Predicate, PredicateStage};
pub use window::WindowStage;

/// Result type for stage operations
pub type StageResult<T> = Result<T, StageError>;

/// Boxed stage, as held by a chain
pub type BoxStage<T> = Box<dyn Stage<T>>;

/// One stateful transform over the side channel
///
/// Stages run strictly serially on the producer's delivering thread; the
/// `&mut self` receiver reflects that their state is private to one
/// subscription and never shared.
pub trait Stage<T>: Send {
    /// Process one message
    ///
    /// Returns `Ok(Some(_))` to pass a (possibly re-annotated) message to
    /// the next stage, `Ok(None)` to suppress it, or `Err(_)` to abort —
    /// aborts are contained at the side-pipeline boundary and never reach
    /// the primary stream.
    fn apply(&mut self, message: Message<T>) -> StageResult<Option<Message<T>>>;

    /// Name of this stage for logging and diagnostics
    fn name(&self) -> &'static str;
}
