//! Stage error types

use thiserror::Error;

/// Errors raised by a transformation stage
#[derive(Debug, Error)]
pub enum StageError {
    /// Stage logic failed
    #[error("stage '{stage}' failed: {reason}")]
    Failed {
        /// Name of the failing stage
        stage: &'static str,
        /// What went wrong
        reason: String,
    },
}

impl StageError {
    /// Create a stage failure error
    pub fn failed(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::Failed {
            stage,
            reason: reason.into(),
        }
    }
}
