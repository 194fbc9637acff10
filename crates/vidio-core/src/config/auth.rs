//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime when "remember me" is not ticked, in minutes.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: u64,
    /// Token lifetime when "remember me" is ticked, in hours.
    #[serde(default = "default_remember_me_ttl")]
    pub remember_me_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            session_ttl_minutes: default_session_ttl(),
            remember_me_ttl_hours: default_remember_me_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    "change-me-in-production".to_string()
}

fn default_session_ttl() -> u64 {
    120
}

fn default_remember_me_ttl() -> u64 {
    24 * 14
}

fn default_password_min() -> usize {
    8
}
