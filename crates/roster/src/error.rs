//! Error types for Roster.

use roster_core::CoreError;
use roster_store::StorageError;
use thiserror::Error;

/// Errors that can occur during record store operations.
///
/// Not-found conditions are never errors: looking up, editing or deleting
/// an unknown id is a defined no-op.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The slot holds a payload that is not a well-formed record list.
    #[error("malformed payload in slot {key}: {reason}")]
    Deserialization { key: String, reason: String },

    /// Storage error, including failed writes.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Core error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for Roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
