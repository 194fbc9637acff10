//! Registration gate: field validation, password policy, and the staff allowlist.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use vidio_auth::password::{PasswordHasher, PasswordValidator, UserAttributes};
use vidio_core::error::AppError;
use vidio_database::{AdminAllowlistRepo, UserRepo};
use vidio_entity::user::{CreateUser, User};

use crate::forms::{FormErrors, RegisterForm};

/// Shown when a registration asks for staff rights without an allowlist match.
pub const ADMIN_NOT_ALLOWED: &str = "You cannot register as an admin, please register as a user.";

/// Creates accounts.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    /// User repository.
    users: Arc<dyn UserRepo>,
    /// Admin allowlist.
    allowlist: Arc<dyn AdminAllowlistRepo>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(
        users: Arc<dyn UserRepo>,
        allowlist: Arc<dyn AdminAllowlistRepo>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            allowlist,
            hasher,
            validator,
        }
    }

    /// Register a new account.
    ///
    /// Invalid fields are reported together and create nothing. A request
    /// for staff rights is honoured only when the exact first and last name
    /// pair is on the allowlist; otherwise nothing is created either.
    pub async fn register(&self, form: RegisterForm) -> Result<User, AppError> {
        let form = form.normalized();

        let mut errors = FormErrors::from_validation(form.validate());
        if !errors.has("password1") && !errors.has("password2") {
            let attributes = UserAttributes {
                username: &form.username,
                first_name: &form.first_name,
                last_name: &form.last_name,
                email: &form.email,
            };
            for problem in self.validator.validate(&form.password2, attributes) {
                errors.add("password2", problem);
            }
        }
        errors.into_result()?;

        if self.users.find_by_username(&form.username).await?.is_some() {
            return Err(AppError::conflict(
                "A user with that username already exists.",
            ));
        }

        if form.is_admin
            && self
                .allowlist
                .find_by_name(&form.first_name, &form.last_name)
                .await?
                .is_none()
        {
            info!(username = %form.username, "Staff registration refused: not on allowlist");
            return Err(AppError::admin_eligibility(ADMIN_NOT_ALLOWED));
        }

        let password_hash = self.hasher.hash_password(&form.password1)?;
        let user = self
            .users
            .create(&CreateUser {
                username: form.username,
                email: form.email,
                first_name: form.first_name,
                last_name: form.last_name,
                password_hash,
                is_staff: form.is_admin,
            })
            .await?;

        info!(
            user_id = %user.id,
            username = %user.username,
            is_staff = user.is_staff,
            "Account created"
        );

        Ok(user)
    }
}
