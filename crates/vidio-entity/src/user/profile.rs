//! User profile entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Avatar reference given to every new profile.
pub const DEFAULT_AVATAR: &str = "default.jpg";

/// Per-user profile, created alongside the user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Owning user (one profile per user).
    pub user_id: Uuid,
    /// Avatar image reference, relative to the media root.
    pub avatar: String,
    /// Short biography.
    pub bio: String,
}

/// Data for updating a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// Owning user.
    pub user_id: Uuid,
    /// New biography.
    pub bio: String,
    /// New avatar reference; `None` keeps the current one.
    pub avatar: Option<String>,
}
