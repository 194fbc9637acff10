//! Audio file entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Longest accepted title, in characters.
pub const MAX_TITLE_CHARS: u64 = 100;
/// Longest accepted village name, in characters.
pub const MAX_VILLAGE_CHARS: u64 = 100;

/// An uploaded audio recording.
///
/// Rows are never updated after insert; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AudioFile {
    /// Unique, immutable record identifier.
    pub id: i64,
    /// Short title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Reference to the stored payload, relative to the media root.
    pub audio: String,
    /// Village the recording was made in.
    pub village: Option<String>,
    /// When the record was created.
    pub uploaded_at: DateTime<Utc>,
}

impl AudioFile {
    /// The original file name of the payload, without the storage prefix.
    pub fn file_name(&self) -> &str {
        let name = self.audio.rsplit('/').next().unwrap_or(&self.audio);
        // Stored names are `<uuid>_<original>`.
        match name.split_once('_') {
            Some((prefix, original)) if prefix.len() == 32 => original,
            _ => name,
        }
    }
}

/// Data required to create a new audio record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAudioFile {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Stored payload reference.
    pub audio: String,
    /// Optional village.
    pub village: Option<String>,
}
