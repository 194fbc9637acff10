//! Single-record audio operations.

use std::sync::Arc;

use tracing::{info, warn};

use vidio_auth::rbac::{Permission, RbacEnforcer};
use vidio_core::error::AppError;
use vidio_core::traits::storage::StorageProvider;
use vidio_database::AudioFileRepo;
use vidio_entity::audio::AudioFile;

use crate::context::RequestContext;

/// Looks up and deletes audio records.
#[derive(Debug, Clone)]
pub struct AudioService {
    /// Audio record repository.
    audio_files: Arc<dyn AudioFileRepo>,
    /// Payload storage.
    storage: Arc<dyn StorageProvider>,
    /// Permission checks.
    rbac: RbacEnforcer,
}

impl AudioService {
    /// Creates a new audio service.
    pub fn new(audio_files: Arc<dyn AudioFileRepo>, storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            audio_files,
            storage,
            rbac: RbacEnforcer::new(),
        }
    }

    /// Fetch a record or fail with not-found.
    pub async fn get(&self, id: i64) -> Result<AudioFile, AppError> {
        self.audio_files
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Audio file {id} not found")))
    }

    /// Delete a record as `ctx`.
    ///
    /// A missing record is reported as not-found to every caller, staff or
    /// not. Non-staff callers are refused and the record is left in place.
    /// The payload is removed after the record; failing to remove it is
    /// logged but does not fail the request.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        let record = self.get(id).await?;
        self.rbac.require_permission(ctx, Permission::DeleteAudio)?;

        if !self.audio_files.delete(id).await? {
            return Err(AppError::not_found(format!("Audio file {id} not found")));
        }

        if let Err(e) = self.storage.delete(&record.audio).await {
            warn!(audio_id = id, path = %record.audio, error = %e, "Failed to remove audio payload");
        }

        info!(user_id = %ctx.user_id, audio_id = id, title = %record.title, "Audio deleted");
        Ok(())
    }
}
