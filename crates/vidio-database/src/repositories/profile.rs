//! Profile repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use vidio_core::error::{AppError, ErrorKind};
use vidio_core::result::AppResult;
use vidio_entity::user::{Profile, UpdateProfile};

use crate::repos::ProfileRepo;

/// Repository for user profiles.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepo for ProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    async fn update(&self, data: &UpdateProfile) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET bio = $2, avatar = COALESCE($3, avatar) \
             WHERE user_id = $1 RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.bio)
        .bind(data.avatar.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| AppError::not_found(format!("Profile for user {} not found", data.user_id)))
    }
}
