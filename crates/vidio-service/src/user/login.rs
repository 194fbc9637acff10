//! Credential check and token issuance.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use vidio_auth::jwt::{IssuedToken, JwtEncoder};
use vidio_auth::password::PasswordHasher;
use vidio_core::error::AppError;
use vidio_database::UserRepo;
use vidio_entity::user::User;

use crate::forms::LoginForm;

const BAD_CREDENTIALS: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// A successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// The bearer token to present on later requests.
    #[serde(flatten)]
    pub token: IssuedToken,
}

/// Authenticates users.
#[derive(Debug, Clone)]
pub struct LoginService {
    users: Arc<dyn UserRepo>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl LoginService {
    /// Creates a new login service.
    pub fn new(
        users: Arc<dyn UserRepo>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Check credentials and issue a token. `remember_me` selects the long lifetime.
    pub async fn login(&self, form: LoginForm) -> Result<LoginOutcome, AppError> {
        form.validate()?;

        let Some(user) = self.users.find_by_username(&form.username).await? else {
            warn!(username = %form.username, "Login failed: unknown user");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        };

        if !self.hasher.verify_password(&form.password, &user.password_hash)? {
            warn!(username = %form.username, "Login failed: wrong password");
            return Err(AppError::authentication(BAD_CREDENTIALS));
        }

        if !user.is_active {
            return Err(AppError::authentication("This account is inactive."));
        }

        let token = self
            .encoder
            .issue(user.id, &user.username, user.is_staff, form.remember_me)?;

        info!(
            user_id = %user.id,
            remember_me = form.remember_me,
            expires_at = %token.expires_at,
            "User logged in"
        );

        Ok(LoginOutcome { user, token })
    }
}
