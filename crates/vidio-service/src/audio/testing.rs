//! Fixtures shared by the service unit tests.

use std::sync::Arc;

use bytes::Bytes;
use vidio_core::traits::storage::StorageProvider;
use vidio_database::{AudioFileRepo, MemoryStore};
use vidio_entity::audio::CreateAudioFile;
use vidio_storage::LocalStorageProvider;

use crate::context::RequestContext;

/// A store holding `n` records titled `Recording 1..=n`.
pub(crate) async fn seed_store(n: usize) -> MemoryStore {
    let store = MemoryStore::new();
    for i in 1..=n {
        let data = CreateAudioFile {
            title: format!("Recording {i}"),
            description: format!("Description {i}"),
            audio: format!("audio/rec{i}.mp3"),
            village: None,
        };
        AudioFileRepo::create(&store, &data).await.unwrap();
    }
    store
}

/// Local storage in a fresh temporary directory.
pub(crate) async fn temp_storage() -> (tempfile::TempDir, Arc<dyn StorageProvider>) {
    let dir = tempfile::tempdir().unwrap();
    let provider = LocalStorageProvider::new(dir.path()).await.unwrap();
    (dir, Arc::new(provider))
}

/// Write a payload and create a record pointing at it.
pub(crate) async fn stored_record(
    store: &MemoryStore,
    storage: &Arc<dyn StorageProvider>,
    path: &str,
) -> i64 {
    storage
        .write(path, Bytes::from_static(b"ID3\x04"))
        .await
        .unwrap();
    let data = CreateAudioFile {
        title: "Stored".into(),
        description: "has a payload".into(),
        audio: path.into(),
        village: Some("Kampung".into()),
    };
    AudioFileRepo::create(store, &data).await.unwrap().id
}

/// An authenticated non-staff actor.
pub(crate) fn member() -> RequestContext {
    RequestContext::new(uuid::Uuid::new_v4(), "member".into(), false)
}

/// An authenticated staff actor.
pub(crate) fn staff() -> RequestContext {
    RequestContext::new(uuid::Uuid::new_v4(), "curator".into(), true)
}
