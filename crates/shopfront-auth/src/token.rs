//! Access and refresh tokens.

use crate::AuthError;
use serde::{Deserialize, Serialize};
use shopfront_commerce::ids::UserId;

/// Token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Short-lived token sent with each request.
    Access,
    /// Long-lived token used to mint new access tokens.
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }

    /// Default expiration time for this kind, in seconds.
    pub fn default_expiry_secs(&self) -> i64 {
        match self {
            TokenKind::Access => 15 * 60,          // 15 minutes
            TokenKind::Refresh => 7 * 24 * 60 * 60, // 7 days
        }
    }
}

/// An issued token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthToken {
    /// The token value.
    pub token: String,
    /// Token kind.
    pub kind: TokenKind,
    /// User this token belongs to.
    pub user_id: UserId,
    /// Unix timestamp when the token was issued.
    pub issued_at: i64,
    /// Unix timestamp when the token expires.
    pub expires_at: i64,
}

impl AuthToken {
    /// Generate a new token of the given kind.
    pub fn generate(kind: TokenKind, user_id: UserId) -> Self {
        let now = current_timestamp();
        Self {
            token: generate_token_string(),
            kind,
            user_id,
            issued_at: now,
            expires_at: now + kind.default_expiry_secs(),
        }
    }

    /// Check if the token is expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Validate the token for use as the given kind.
    pub fn validate(&self, expected: TokenKind) -> Result<(), AuthError> {
        if self.kind != expected {
            return Err(AuthError::InvalidToken);
        }
        if self.is_expired() {
            return Err(AuthError::TokenExpired);
        }
        Ok(())
    }

    /// Seconds until expiration.
    pub fn time_to_expiry(&self) -> i64 {
        (self.expires_at - current_timestamp()).max(0)
    }
}

/// The access/refresh pair returned by the token endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenPair {
    /// Access token.
    pub access: AuthToken,
    /// Refresh token.
    pub refresh: AuthToken,
}

impl TokenPair {
    /// Issue a fresh pair for a user.
    pub fn issue(user_id: UserId) -> Self {
        Self {
            access: AuthToken::generate(TokenKind::Access, user_id.clone()),
            refresh: AuthToken::generate(TokenKind::Refresh, user_id),
        }
    }

    /// Mint a new access token off the refresh token.
    ///
    /// The refresh token is retained; only the access token rotates.
    pub fn refresh(&self) -> Result<TokenPair, AuthError> {
        self.refresh.validate(TokenKind::Refresh)?;
        Ok(Self {
            access: AuthToken::generate(TokenKind::Access, self.refresh.user_id.clone()),
            refresh: self.refresh.clone(),
        })
    }
}

/// Generate a random token string (24 bytes, URL-safe base64).
fn generate_token_string() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 24] = rand::thread_rng().gen();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
