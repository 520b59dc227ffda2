//! Custom error types for the block-signals crate.

use thiserror::Error;

/// The error type for all blocking operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// An argument violates the call contract (zero or negative block size,
    /// unparseable block size, channels of different lengths).
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
}

impl BlockError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BlockError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// A convenience `Result` type alias using the crate's `BlockError` type.
pub type Result<T> = std::result::Result<T, BlockError>;
