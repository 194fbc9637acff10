//! Backend selection. Bundles one implementation of every repository trait.

use std::sync::Arc;

use tracing::info;

use vidio_core::config::{DatabaseConfig, DatabaseProvider};
use vidio_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repos::{AdminAllowlistRepo, AudioFileRepo, ProfileRepo, UserRepo};
use crate::repositories::{
    AdminAllowlistRepository, AudioFileRepository, ProfileRepository, UserRepository,
};

/// The repositories the service layer works against.
#[derive(Debug, Clone)]
pub struct Repositories {
    /// Audio records.
    pub audio_files: Arc<dyn AudioFileRepo>,
    /// Users.
    pub users: Arc<dyn UserRepo>,
    /// Profiles.
    pub profiles: Arc<dyn ProfileRepo>,
    /// Admin allowlist.
    pub admin_allowlist: Arc<dyn AdminAllowlistRepo>,
    /// The PostgreSQL pool, when that backend is in use.
    pub pool: Option<DatabasePool>,
}

impl Repositories {
    /// Connect to the configured backend, running migrations for PostgreSQL.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                run_migrations(pool.pool()).await?;
                Ok(Self::postgres(pool))
            }
            DatabaseProvider::Memory => {
                info!("Using in-memory record store; data will not survive a restart");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Repositories backed by a PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            audio_files: Arc::new(AudioFileRepository::new(pg.clone())),
            users: Arc::new(UserRepository::new(pg.clone())),
            profiles: Arc::new(ProfileRepository::new(pg.clone())),
            admin_allowlist: Arc::new(AdminAllowlistRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Repositories sharing one in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            audio_files: Arc::new(store.clone()),
            users: Arc::new(store.clone()),
            profiles: Arc::new(store.clone()),
            admin_allowlist: Arc::new(store),
            pool: None,
        }
    }

    /// Check backend connectivity.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }
}
