//! Error types for level setup

use thiserror::Error;

/// Failures that abort world setup. Nothing is built when one of these is returned.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The blob is not valid base64 (bad alphabet character, malformed padding,
    /// or a length of 1 mod 4)
    #[error("Level blob is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded bytes are not a level document
    #[error("Level data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but describes an impossible level
    #[error("Invalid level data: {0}")]
    Invalid(String),
}

/// Result type for level operations
pub type Result<T> = std::result::Result<T, LevelError>;
