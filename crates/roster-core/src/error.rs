//! Error types for Roster Core.

use thiserror::Error;

/// Core errors that can occur while building or decoding records.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid employee id: {0}")]
    InvalidId(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// The stored payload is not a well-formed record list.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("id space exhausted after {0}")]
    IdsExhausted(u64),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
