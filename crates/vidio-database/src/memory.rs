//! In-process record store.
//!
//! Behaves like the PostgreSQL repositories for everything the services
//! observe: ids start at 1 and are never reused, listings are ordered by
//! id, usernames are unique, and each user gets a profile on creation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use vidio_core::error::AppError;
use vidio_core::result::AppResult;
use vidio_core::types::pagination::PageRequest;
use vidio_entity::audio::{AudioFile, CreateAudioFile, SearchField};
use vidio_entity::user::{
    CreateUser, DEFAULT_AVATAR, PossibleAdmin, Profile, UpdateProfile, UpdateUser, User,
};

use crate::repos::{AdminAllowlistRepo, AudioFileRepo, ProfileRepo, UserRepo};

#[derive(Debug, Default)]
struct MemoryState {
    audio_files: BTreeMap<i64, AudioFile>,
    last_audio_id: i64,
    users: HashMap<Uuid, User>,
    profiles: HashMap<Uuid, Profile>,
    admins: Vec<PossibleAdmin>,
}

/// Record store held entirely in memory. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AudioFileRepo for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<AudioFile>> {
        Ok(self.inner.read().await.audio_files.get(&id).cloned())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.inner.read().await.audio_files.len() as u64)
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<Vec<AudioFile>> {
        let state = self.inner.read().await;
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(state
            .audio_files
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<AudioFile>> {
        Ok(self.inner.read().await.audio_files.values().cloned().collect())
    }

    async fn search(&self, field: SearchField, query: &str) -> AppResult<Vec<AudioFile>> {
        let state = self.inner.read().await;
        Ok(state
            .audio_files
            .values()
            .filter(|file| field.matches(file, query))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &CreateAudioFile) -> AppResult<AudioFile> {
        let mut state = self.inner.write().await;
        state.last_audio_id += 1;
        let file = AudioFile {
            id: state.last_audio_id,
            title: data.title.clone(),
            description: data.description.clone(),
            audio: data.audio.clone(),
            village: data.village.clone(),
            uploaded_at: Utc::now(),
        };
        state.audio_files.insert(file.id, file.clone());
        Ok(file)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.inner.write().await.audio_files.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let state = self.inner.read().await;
        Ok(state
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut state = self.inner.write().await;
        if state.users.values().any(|u| u.username == data.username) {
            return Err(AppError::conflict(
                "A user with that username already exists.",
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            email: data.email.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            password_hash: data.password_hash.clone(),
            is_staff: data.is_staff,
            is_active: true,
            date_joined: now,
            updated_at: now,
        };
        state.profiles.insert(
            user.id,
            Profile {
                user_id: user.id,
                avatar: DEFAULT_AVATAR.to_string(),
                bio: String::new(),
            },
        );
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, data: &UpdateUser) -> AppResult<User> {
        let mut state = self.inner.write().await;
        if state
            .users
            .values()
            .any(|u| u.id != data.id && u.username == data.username)
        {
            return Err(AppError::conflict(
                "A user with that username already exists.",
            ));
        }

        let user = state
            .users
            .get_mut(&data.id)
            .ok_or_else(|| AppError::not_found(format!("User {} not found", data.id)))?;
        user.username = data.username.clone();
        user.email = data.email.clone();
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl ProfileRepo for MemoryStore {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.inner.read().await.profiles.get(&user_id).cloned())
    }

    async fn update(&self, data: &UpdateProfile) -> AppResult<Profile> {
        let mut state = self.inner.write().await;
        let profile = state.profiles.get_mut(&data.user_id).ok_or_else(|| {
            AppError::not_found(format!("Profile for user {} not found", data.user_id))
        })?;
        profile.bio = data.bio.clone();
        if let Some(avatar) = &data.avatar {
            profile.avatar = avatar.clone();
        }
        Ok(profile.clone())
    }
}

#[async_trait]
impl AdminAllowlistRepo for MemoryStore {
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<PossibleAdmin>> {
        let state = self.inner.read().await;
        Ok(state
            .admins
            .iter()
            .find(|a| a.first_name == first_name && a.last_name == last_name)
            .cloned())
    }

    async fn insert_if_missing(&self, first_name: &str, last_name: &str) -> AppResult<bool> {
        let mut state = self.inner.write().await;
        if state
            .admins
            .iter()
            .any(|a| a.first_name == first_name && a.last_name == last_name)
        {
            return Ok(false);
        }
        let id = state.admins.len() as i64 + 1;
        state.admins.push(PossibleAdmin {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        });
        Ok(true)
    }
}
