//! Stored user credentials.

use crate::password;
use crate::AuthError;
use serde::{Deserialize, Serialize};
use shopfront_commerce::ids::UserId;

/// Credentials for a registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// User id.
    pub user_id: UserId,
    /// Email address, stored lowercased.
    pub email: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Credentials {
    /// Register a user, validating and hashing the password.
    pub fn register(
        user_id: UserId,
        email: impl Into<String>,
        password: &str,
    ) -> Result<Self, AuthError> {
        password::validate_strength(password)?;
        Ok(Self {
            user_id,
            email: email.into().to_lowercase(),
            password_hash: password::hash_password(password)?,
            created_at: current_timestamp(),
        })
    }

    /// Verify a login attempt, failing with `InvalidCredentials` on
    /// mismatch so callers can't distinguish a wrong password from a
    /// wrong hash.
    pub fn verify(&self, password: &str) -> Result<(), AuthError> {
        if password::verify_password(password, &self.password_hash)? {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Check whether this credential belongs to the given email.
    pub fn matches_email(&self, email: &str) -> bool {
        self.email == email.to_lowercase()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
