//! Audio payload download.

use std::sync::Arc;

use vidio_core::error::AppError;
use vidio_core::traits::storage::{ByteStream, StorageProvider};
use vidio_entity::audio::AudioFile;
use vidio_storage::content_type_for;

use super::service::AudioService;

/// Streams stored audio payloads.
#[derive(Debug, Clone)]
pub struct DownloadService {
    audio: AudioService,
    storage: Arc<dyn StorageProvider>,
}

/// A payload ready to be streamed to the client.
pub struct DownloadResult {
    /// The record the payload belongs to.
    pub file: AudioFile,
    /// Payload content.
    pub stream: ByteStream,
    /// MIME type for Content-Type header.
    pub content_type: &'static str,
    /// Suggested filename for Content-Disposition.
    pub filename: String,
}

impl std::fmt::Debug for DownloadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadResult")
            .field("file", &self.file)
            .field("content_type", &self.content_type)
            .field("filename", &self.filename)
            .finish()
    }
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(audio: AudioService, storage: Arc<dyn StorageProvider>) -> Self {
        Self { audio, storage }
    }

    /// Open the payload of record `id`.
    pub async fn download(&self, id: i64) -> Result<DownloadResult, AppError> {
        let file = self.audio.get(id).await?;
        let stream = self.storage.read(&file.audio).await?;
        Ok(DownloadResult {
            content_type: content_type_for(&file.audio),
            filename: file.file_name().to_string(),
            file,
            stream,
        })
    }
}
