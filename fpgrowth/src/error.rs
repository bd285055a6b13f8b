//! Error types for fpgrowth.

use thiserror::Error;

/// Precondition violations detected before any tree is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FpGrowthError {
    /// A mining parameter is out of range (zero support, bad fraction, zero length cap).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A transaction entry is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for fpgrowth operations.
pub type Result<T> = std::result::Result<T, FpGrowthError>;
