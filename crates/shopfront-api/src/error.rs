//! Backend error types.

use shopfront_auth::AuthError;
use shopfront_commerce::CommerceError;
use thiserror::Error;

/// Errors returned by the mock backend.
///
/// Every variant is recoverable: the caller surfaces the message and
/// offers a retry or a navigation, never a crash.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failure (bad credentials, stale tokens).
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Domain rejection (invalid promo, insufficient stock, ...).
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Whether retrying the same request can succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Commerce(e) => e.is_retryable(),
            _ => false,
        }
    }
}
