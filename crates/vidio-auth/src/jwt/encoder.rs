//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vidio_core::config::AuthConfig;
use vidio_core::error::AppError;

use super::claims::Claims;

/// Creates signed JWT bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Lifetime of an ordinary login.
    session_ttl: Duration,
    /// Lifetime of a "remember me" login.
    remember_me_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("session_ttl", &self.session_ttl)
            .field("remember_me_ttl", &self.remember_me_ttl)
            .finish()
    }
}

/// A freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The encoded bearer token.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            session_ttl: Duration::minutes(config.session_ttl_minutes as i64),
            remember_me_ttl: Duration::hours(config.remember_me_ttl_hours as i64),
        }
    }

    /// Issues a token for a user. `remember_me` selects the long lifetime.
    pub fn issue(
        &self,
        user_id: Uuid,
        username: &str,
        is_staff: bool,
        remember_me: bool,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let ttl = if remember_me {
            self.remember_me_ttl
        } else {
            self.session_ttl
        };
        let expires_at = now + ttl;

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            is_staff,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
