//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vidio_entity::user::User;
use vidio_service::user::LoginOutcome;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Application name.
    pub name: String,
    /// Username of the caller, if logged in.
    pub user: Option<String>,
}

/// One input of an HTML-style form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    /// Field name as submitted.
    pub name: String,
    /// Input type, e.g. `text`, `password`, `checkbox`, `file`.
    pub kind: String,
    /// Whether the field must be filled in.
    pub required: bool,
}

impl FormField {
    fn new(name: &str, kind: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            required,
        }
    }
}

/// An empty form, returned by the GET side of form endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDescriptor {
    /// Where the form is posted.
    pub action: String,
    /// `application/x-www-form-urlencoded` or `multipart/form-data`.
    pub enctype: String,
    /// Inputs in display order.
    pub fields: Vec<FormField>,
}

impl FormDescriptor {
    /// The registration form.
    pub fn register() -> Self {
        Self {
            action: "/register/".into(),
            enctype: "application/x-www-form-urlencoded".into(),
            fields: vec![
                FormField::new("username", "text", true),
                FormField::new("email", "email", true),
                FormField::new("first_name", "text", true),
                FormField::new("last_name", "text", true),
                FormField::new("password1", "password", true),
                FormField::new("password2", "password", true),
                FormField::new("is_admin", "checkbox", false),
            ],
        }
    }

    /// The upload form.
    pub fn upload() -> Self {
        Self {
            action: "/upload/".into(),
            enctype: "multipart/form-data".into(),
            fields: vec![
                FormField::new("title", "text", true),
                FormField::new("description", "textarea", true),
                FormField::new("audio", "file", true),
                FormField::new("village", "text", false),
            ],
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Staff flag.
    pub is_staff: bool,
}

impl From<&User> for UserResponse {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            is_staff: u.is_staff,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            user: UserResponse::from(&outcome.user),
            token: outcome.token.token,
            expires_at: outcome.token.expires_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every dependency answered, `degraded` otherwise.
    pub status: String,
    /// Version.
    pub version: String,
    /// Record store status.
    pub database: String,
    /// Payload storage status.
    pub storage: String,
}
