//! Admin allowlist repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use vidio_core::error::{AppError, ErrorKind};
use vidio_core::result::AppResult;
use vidio_entity::user::PossibleAdmin;

use crate::repos::AdminAllowlistRepo;

/// Repository for the `possible_admins` table.
#[derive(Debug, Clone)]
pub struct AdminAllowlistRepository {
    pool: PgPool,
}

impl AdminAllowlistRepository {
    /// Create a new allowlist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminAllowlistRepo for AdminAllowlistRepository {
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<PossibleAdmin>> {
        sqlx::query_as::<_, PossibleAdmin>(
            "SELECT * FROM possible_admins WHERE first_name = $1 AND last_name = $2",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to look up admin allowlist", e)
        })
    }

    async fn insert_if_missing(&self, first_name: &str, last_name: &str) -> AppResult<bool> {
        let result = sqlx::query(
            r#"INSERT INTO possible_admins (first_name, last_name)
               VALUES ($1, $2)
               ON CONFLICT (first_name, last_name) DO NOTHING"#,
        )
        .bind(first_name)
        .bind(last_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to seed admin allowlist", e)
        })?;
        Ok(result.rows_affected() > 0)
    }
}
