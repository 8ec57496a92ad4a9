//! Error types for the tap crate

use thiserror::Error;

/// Errors that can occur in the tap system
#[derive(Error, Debug)]
pub enum TapError {
    /// A second observer tried to attach to the side channel
    #[error("side channel already has an observer")]
    AlreadyAttached,
}

/// Result type for tap operations
pub type Result<T> = std::result::Result<T, TapError>;
