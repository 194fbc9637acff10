//! Repository traits implemented by every record store backend.

use async_trait::async_trait;
use uuid::Uuid;

use vidio_core::result::AppResult;
use vidio_core::types::pagination::PageRequest;
use vidio_entity::audio::{AudioFile, CreateAudioFile, SearchField};
use vidio_entity::user::{PossibleAdmin, Profile, UpdateProfile, UpdateUser, User};
use vidio_entity::user::CreateUser;

/// Audio record persistence. Listings are always ordered by `id` ascending.
#[async_trait]
pub trait AudioFileRepo: Send + Sync + std::fmt::Debug {
    /// Find a record by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<AudioFile>>;

    /// Count all records.
    async fn count(&self) -> AppResult<u64>;

    /// Fetch one page of records. The page is used as given, not clamped.
    async fn find_page(&self, page: &PageRequest) -> AppResult<Vec<AudioFile>>;

    /// Fetch every record.
    async fn find_all(&self) -> AppResult<Vec<AudioFile>>;

    /// Records whose `field` contains `query`, ignoring case.
    async fn search(&self, field: SearchField, query: &str) -> AppResult<Vec<AudioFile>>;

    /// Insert a new record and return it with its assigned id and timestamp.
    async fn create(&self, data: &CreateAudioFile) -> AppResult<AudioFile>;

    /// Delete a record. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// User persistence.
#[async_trait]
pub trait UserRepo: Send + Sync + std::fmt::Debug {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a user together with an empty profile.
    ///
    /// Fails with a conflict if the username is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Update username and email.
    async fn update(&self, data: &UpdateUser) -> AppResult<User>;
}

/// Profile persistence.
#[async_trait]
pub trait ProfileRepo: Send + Sync + std::fmt::Debug {
    /// Find the profile belonging to a user.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    /// Update the profile's editable fields.
    async fn update(&self, data: &UpdateProfile) -> AppResult<Profile>;
}

/// Read access to the admin allowlist, plus idempotent seeding.
#[async_trait]
pub trait AdminAllowlistRepo: Send + Sync + std::fmt::Debug {
    /// Find the entry matching both names exactly.
    async fn find_by_name(&self, first_name: &str, last_name: &str)
    -> AppResult<Option<PossibleAdmin>>;

    /// Insert an entry unless an identical one exists. Returns `true` if inserted.
    async fn insert_if_missing(&self, first_name: &str, last_name: &str) -> AppResult<bool>;
}
