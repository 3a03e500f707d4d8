//! Authentication tokens.
//!
//! Opaque bearer tokens for API access and password reset flows.

use crate::AuthError;
use ember_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// Token type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// API access token, sent as a bearer header.
    Access,
    /// Single-use password reset token.
    PasswordReset,
}

impl TokenType {
    /// Get token type as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::PasswordReset => "password_reset",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "access" => Some(TokenType::Access),
            "password_reset" => Some(TokenType::PasswordReset),
            _ => None,
        }
    }

    /// Get default expiration time for this token type (in seconds).
    pub fn default_expiry_secs(&self) -> i64 {
        match self {
            TokenType::Access => 30 * 24 * 60 * 60, // 30 days
            TokenType::PasswordReset => 60 * 60,    // 1 hour
        }
    }

    /// Whether a token of this type is consumed on first use.
    pub fn is_single_use(&self) -> bool {
        matches!(self, TokenType::PasswordReset)
    }
}

/// An authentication token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    /// The token value.
    pub token: String,
    /// Token type.
    pub token_type: TokenType,
    /// User ID this token belongs to.
    pub user_id: UserId,
    /// Unix timestamp when token was created.
    pub created_at: i64,
    /// Unix timestamp when token expires.
    pub expires_at: i64,
    /// Whether the token has been used (single-use types only).
    pub used: bool,
}

impl AuthToken {
    /// Generate a new token with the type's default expiry.
    pub fn generate(token_type: TokenType, user_id: UserId) -> Self {
        let now = current_timestamp();
        Self {
            token: generate_token_string(),
            token_type,
            user_id,
            created_at: now,
            expires_at: now + token_type.default_expiry_secs(),
            used: false,
        }
    }

    /// Generate a token with custom expiry.
    pub fn generate_with_expiry(token_type: TokenType, user_id: UserId, expiry_secs: i64) -> Self {
        let now = current_timestamp();
        Self {
            token: generate_token_string(),
            token_type,
            user_id,
            created_at: now,
            expires_at: now + expiry_secs,
            used: false,
        }
    }

    /// Check if token is expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Check if token is valid (not expired, and not consumed if
    /// single-use).
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !(self.token_type.is_single_use() && self.used)
    }

    /// Validate the token.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.token_type.is_single_use() && self.used {
            return Err(AuthError::InvalidToken);
        }
        if self.is_expired() {
            return Err(AuthError::TokenExpired);
        }
        Ok(())
    }

    /// Mark token as used.
    pub fn mark_used(&mut self) {
        self.used = true;
    }

    /// Get time until expiration in seconds.
    pub fn time_to_expiry(&self) -> i64 {
        (self.expires_at - current_timestamp()).max(0)
    }
}

/// Generate a cryptographically secure token string.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_generation() {
        let token = AuthToken::generate(TokenType::Access, UserId::new(1));
        assert!(!token.is_expired());
        assert!(token.is_valid());
        assert_eq!(token.token.len(), 32);
    }

    #[test]
    fn test_token_types() {
        assert_eq!(TokenType::Access.as_str(), "access");
        assert_eq!(
            TokenType::from_str("password_reset"),
            Some(TokenType::PasswordReset)
        );
        assert!(TokenType::PasswordReset.is_single_use());
        assert!(!TokenType::Access.is_single_use());
    }

    #[test]
    fn test_reset_token_is_single_use() {
        let mut token = AuthToken::generate(TokenType::PasswordReset, UserId::new(2));
        assert!(token.validate().is_ok());

        token.mark_used();
        assert!(token.validate().is_err());
        assert!(!token.is_valid());
    }

    #[test]
    fn test_used_access_token_stays_valid() {
        let mut token = AuthToken::generate(TokenType::Access, UserId::new(3));
        token.mark_used();
        assert!(token.validate().is_ok());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = AuthToken::generate_with_expiry(TokenType::Access, UserId::new(4), -1);
        assert!(token.is_expired());
        assert!(matches!(token.validate(), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_token_entropy() {
        let token = AuthToken::generate(TokenType::Access, UserId::new(1));

        // 24 random bytes base64-encoded without padding: 32 URL-safe chars
        assert_eq!(token.token.len(), 32);
        assert!(token
            .token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_unique_tokens() {
        let tokens: Vec<String> = (0..50)
            .map(|_| AuthToken::generate(TokenType::Access, UserId::new(1)).token)
            .collect();
        for i in 0..tokens.len() {
            for j in (i + 1)..tokens.len() {
                assert_ne!(tokens[i], tokens[j]);
            }
        }
    }
}
