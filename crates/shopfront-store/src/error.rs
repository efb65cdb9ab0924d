//! Store error types.

use shopfront_commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur in the store and its persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying storage failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O failure in the file-backed store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A domain transition rejected the action.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
