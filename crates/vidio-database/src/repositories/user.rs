//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use vidio_core::error::{AppError, ErrorKind};
use vidio_core::result::AppResult;
use vidio_entity::user::{CreateUser, DEFAULT_AVATAR, UpdateUser, User};

use crate::connection::DatabasePool;
use crate::repos::UserRepo;

/// Repository for user CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error, action: &str) -> AppError {
    if DatabasePool::is_unique_violation(&err) {
        AppError::conflict("A user with that username already exists.")
    } else {
        AppError::with_source(ErrorKind::Database, format!("Failed to {action} user"), err)
    }
}

#[async_trait]
impl UserRepo for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (id, username, email, first_name, last_name, password_hash, is_staff)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.password_hash)
        .bind(data.is_staff)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, "create"))?;

        sqlx::query("INSERT INTO profiles (user_id, avatar, bio) VALUES ($1, $2, '')")
            .bind(user.id)
            .bind(DEFAULT_AVATAR)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create profile", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(user)
    }

    async fn update(&self, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users SET username = $2, email = $3, updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(data.id)
        .bind(&data.username)
        .bind(&data.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "update"))?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", data.id)))
    }
}
