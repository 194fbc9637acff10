//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vidio_auth::rbac::Actor;
use vidio_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the login guard from the stored user, so `is_staff` reflects
/// the account as it is now rather than when the token was issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username.
    pub username: String,
    /// Whether the user holds staff rights.
    pub is_staff: bool,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: String, is_staff: bool) -> Self {
        Self {
            user_id,
            username,
            is_staff,
        }
    }

    /// Creates a context for a loaded user.
    pub fn for_user(user: &User) -> Self {
        Self::new(user.id, user.username.clone(), user.is_staff)
    }
}

impl Actor for RequestContext {
    fn username(&self) -> &str {
        &self.username
    }

    fn is_staff(&self) -> bool {
        self.is_staff
    }
}
