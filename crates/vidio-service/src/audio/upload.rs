//! Audio upload: validate the form, store the payload, create the record.

use std::sync::Arc;

use tracing::{info, warn};

use vidio_core::config::StorageConfig;
use vidio_core::error::AppError;
use vidio_core::traits::storage::StorageProvider;
use vidio_database::AudioFileRepo;
use vidio_entity::audio::{AudioFile, CreateAudioFile};
use vidio_storage::payload_path;

use crate::context::RequestContext;
use crate::forms::UploadForm;

/// Handles audio uploads.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Audio record repository.
    audio_files: Arc<dyn AudioFileRepo>,
    /// Payload storage.
    storage: Arc<dyn StorageProvider>,
    /// Storage configuration.
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        audio_files: Arc<dyn AudioFileRepo>,
        storage: Arc<dyn StorageProvider>,
        config: StorageConfig,
    ) -> Self {
        Self {
            audio_files,
            storage,
            config,
        }
    }

    /// Validate and persist an upload.
    ///
    /// Nothing is stored if any field is invalid. If the record cannot be
    /// created the already written payload is removed again.
    pub async fn upload(&self, ctx: &RequestContext, form: UploadForm) -> Result<AudioFile, AppError> {
        let form = form.normalized();
        form.check(self.config.max_upload_size_bytes)?;

        let Some(file) = form.file else {
            return Err(AppError::invalid_field("audio", crate::forms::REQUIRED));
        };

        let storage_path = payload_path(&file.file_name);
        let size = file.data.len();
        self.storage.write(&storage_path, file.data).await?;

        let data = CreateAudioFile {
            title: form.title,
            description: form.description,
            audio: storage_path.clone(),
            village: form.village,
        };

        let record = match self.audio_files.create(&data).await {
            Ok(record) => record,
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&storage_path).await {
                    warn!(path = %storage_path, error = %cleanup, "Failed to remove orphaned payload");
                }
                return Err(e);
            }
        };

        info!(
            user_id = %ctx.user_id,
            audio_id = record.id,
            title = %record.title,
            size,
            "Audio uploaded"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use vidio_core::error::ErrorKind;
    use vidio_database::MemoryStore;

    use super::*;
    use crate::audio::testing::{member, temp_storage};
    use crate::forms::UploadedFile;

    fn form(title: &str, data: &'static [u8]) -> UploadForm {
        UploadForm {
            title: title.into(),
            description: "Birds before sunrise".into(),
            village: Some(" Kampung Baru ".into()),
            file: Some(UploadedFile {
                file_name: "dawn chorus.mp3".into(),
                data: Bytes::from_static(data),
            }),
        }
    }

    #[tokio::test]
    async fn test_upload_stores_payload_and_record() {
        let store = MemoryStore::new();
        let (_dir, storage) = temp_storage().await;
        let service = UploadService::new(
            Arc::new(store.clone()),
            storage.clone(),
            StorageConfig::default(),
        );

        let record = service
            .upload(&member(), form("Dawn", b"ID3\x04\x00"))
            .await
            .unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.village.as_deref(), Some("Kampung Baru"));
        assert_eq!(record.file_name(), "dawn_chorus.mp3");
        assert!(storage.exists(&record.audio).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_upload_stores_nothing() {
        let store = MemoryStore::new();
        let (dir, storage) = temp_storage().await;
        let service = UploadService::new(
            Arc::new(store.clone()),
            storage,
            StorageConfig::default(),
        );

        let err = service
            .upload(&member(), form(&"x".repeat(101), b"ID3"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.field_errors().unwrap().contains_key("title"));

        let err = service.upload(&member(), form("Dawn", b"")).await.unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("audio"));

        assert_eq!(store.count().await.unwrap(), 0);
        assert!(!dir.path().join("audio").exists());
    }

    #[tokio::test]
    async fn test_upload_with_long_multibyte_name() {
        let store = MemoryStore::new();
        let (_dir, storage) = temp_storage().await;
        let service = UploadService::new(
            Arc::new(store.clone()),
            storage.clone(),
            StorageConfig::default(),
        );

        let mut upload = form("Rain", b"ID3\x04\x00");
        if let Some(file) = upload.file.as_mut() {
            file.file_name = format!("{}.mp3", "录".repeat(96));
        }

        let record = service.upload(&member(), upload).await.unwrap();
        assert!(storage.exists(&record.audio).await.unwrap());
        assert!(record.file_name().ends_with(".mp3"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_upload_respects_size_limit() {
        let store = MemoryStore::new();
        let (_dir, storage) = temp_storage().await;
        let config = StorageConfig {
            max_upload_size_bytes: 4,
            ..StorageConfig::default()
        };
        let service = UploadService::new(Arc::new(store.clone()), storage, config);

        let err = service
            .upload(&member(), form("Dawn", b"0123456789"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
