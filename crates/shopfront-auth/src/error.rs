//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// Token invalid or of the wrong kind.
    #[error("token invalid")]
    InvalidToken,

    /// Token expired.
    #[error("token expired")]
    TokenExpired,

    /// Password too weak.
    #[error("password too weak: {0}")]
    WeakPassword(String),

    /// Password hashing failure.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl AuthError {
    /// Check if this is an authentication failure the user can retry.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::TokenExpired
        )
    }
}
