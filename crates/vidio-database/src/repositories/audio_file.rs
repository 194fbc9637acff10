//! Audio file repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use vidio_core::error::{AppError, ErrorKind};
use vidio_core::result::AppResult;
use vidio_core::types::pagination::PageRequest;
use vidio_entity::audio::{AudioFile, CreateAudioFile, SearchField};

use crate::repos::AudioFileRepo;

/// Repository for audio record storage and queries.
#[derive(Debug, Clone)]
pub struct AudioFileRepository {
    pool: PgPool,
}

impl AudioFileRepository {
    /// Create a new audio file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `LIKE` wildcards so the query is matched literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl AudioFileRepo for AudioFileRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<AudioFile>> {
        sqlx::query_as::<_, AudioFile>("SELECT * FROM audio_files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find audio file", e)
            })
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM audio_files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count audio files", e)
            })?;
        Ok(total as u64)
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<Vec<AudioFile>> {
        // OFFSET is a BIGINT; pages past i64::MAX cannot hold rows anyway.
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        let limit = i64::try_from(page.limit()).unwrap_or(i64::MAX);

        sqlx::query_as::<_, AudioFile>(
            "SELECT * FROM audio_files ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list audio files", e))
    }

    async fn find_all(&self) -> AppResult<Vec<AudioFile>> {
        sqlx::query_as::<_, AudioFile>("SELECT * FROM audio_files ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list audio files", e)
            })
    }

    async fn search(&self, field: SearchField, query: &str) -> AppResult<Vec<AudioFile>> {
        let sql = format!(
            "SELECT * FROM audio_files WHERE {} ILIKE $1 ESCAPE '\\' ORDER BY id ASC",
            field.sql_expr()
        );

        sqlx::query_as::<_, AudioFile>(&sql)
            .bind(like_pattern(query))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search audio files", e)
            })
    }

    async fn create(&self, data: &CreateAudioFile) -> AppResult<AudioFile> {
        sqlx::query_as::<_, AudioFile>(
            r#"INSERT INTO audio_files (title, description, audio, village)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.audio)
        .bind(&data.village)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create audio file", e))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM audio_files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete audio file", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use vidio_entity::audio::search::timestamp_text;

    use super::*;

    async fn insert(
        repo: &AudioFileRepository,
        title: &str,
        description: &str,
        village: Option<&str>,
    ) -> AudioFile {
        repo.create(&CreateAudioFile {
            title: title.into(),
            description: description.into(),
            audio: format!("audio/{title}.mp3"),
            village: village.map(String::from),
        })
        .await
        .unwrap()
    }

    fn titles(files: &[AudioFile]) -> Vec<&str> {
        files.iter().map(|f| f.title.as_str()).collect()
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rain"), "%rain%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_search_description_and_village(pool: PgPool) {
        let repo = AudioFileRepository::new(pool);
        insert(&repo, "rain", "Heavy RAIN on a tin roof", Some("Kampung Baru")).await;
        insert(&repo, "market", "Busy stalls", Some("Sungai Lama")).await;
        insert(&repo, "nowhere", "Rain without a village", None).await;

        let found = repo.search(SearchField::Description, "rain").await.unwrap();
        assert_eq!(titles(&found), vec!["rain", "nowhere"]);

        let found = repo.search(SearchField::Village, "BARU").await.unwrap();
        assert_eq!(titles(&found), vec!["rain"]);

        // A record without a village never matches, not even an empty query.
        let found = repo.search(SearchField::Village, "").await.unwrap();
        assert_eq!(titles(&found), vec!["rain", "market"]);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_search_uploaded_at_matches_timestamp_text(pool: PgPool) {
        let repo = AudioFileRepository::new(pool.clone());
        let record = insert(&repo, "dawn", "Birds", None).await;
        let uploaded_at = Utc.with_ymd_and_hms(2023, 5, 2, 4, 33, 10).unwrap();
        sqlx::query("UPDATE audio_files SET uploaded_at = $1 WHERE id = $2")
            .bind(uploaded_at)
            .bind(record.id)
            .execute(&pool)
            .await
            .unwrap();

        for query in [
            "2023-05-02",
            "04:33:10",
            timestamp_text(&uploaded_at).as_str(),
        ] {
            let found = repo.search(SearchField::UploadedAt, query).await.unwrap();
            assert_eq!(titles(&found), vec!["dawn"], "query {query:?}");
        }

        let found = repo.search(SearchField::UploadedAt, "2024").await.unwrap();
        assert!(found.is_empty());
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_search_treats_wildcards_literally(pool: PgPool) {
        let repo = AudioFileRepository::new(pool);
        insert(&repo, "sale", "50% off_today", None).await;
        insert(&repo, "plain", "500 offtoday", None).await;

        let found = repo.search(SearchField::Description, "0% off_").await.unwrap();
        assert_eq!(titles(&found), vec!["sale"]);

        let found = repo.search(SearchField::Description, "_").await.unwrap();
        assert_eq!(titles(&found), vec!["sale"]);

        let found = repo.search(SearchField::Description, "%").await.unwrap();
        assert_eq!(titles(&found), vec!["sale"]);
    }
}
