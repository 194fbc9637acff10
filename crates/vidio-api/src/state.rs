//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use vidio_auth::jwt::{JwtDecoder, JwtEncoder};
use vidio_auth::password::{PasswordHasher, PasswordValidator};
use vidio_core::config::AppConfig;
use vidio_core::traits::storage::StorageProvider;
use vidio_database::Repositories;
use vidio_service::{
    AudioService, DownloadService, ListingService, LoginService, ProfileService,
    RegistrationService, SearchService, UploadService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Record store repositories
    pub repos: Repositories,
    /// Payload storage for audio and profile pictures
    pub storage: Arc<dyn StorageProvider>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Account creation
    pub registration_service: Arc<RegistrationService>,
    /// Credential checks
    pub login_service: Arc<LoginService>,
    /// Own profile
    pub profile_service: Arc<ProfileService>,
    /// Paginated listing
    pub listing_service: Arc<ListingService>,
    /// Search
    pub search_service: Arc<SearchService>,
    /// Uploads
    pub upload_service: Arc<UploadService>,
    /// Single-record operations
    pub audio_service: Arc<AudioService>,
    /// Payload downloads
    pub download_service: Arc<DownloadService>,
}

impl AppState {
    /// Wire every service from configuration, repositories, and storage.
    pub fn new(config: AppConfig, repos: Repositories, storage: Arc<dyn StorageProvider>) -> Self {
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let registration_service = Arc::new(RegistrationService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.admin_allowlist),
            Arc::clone(&password_hasher),
            password_validator,
        ));
        let login_service = Arc::new(LoginService::new(
            Arc::clone(&repos.users),
            password_hasher,
            jwt_encoder,
        ));
        let profile_service = Arc::new(ProfileService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.profiles),
            Arc::clone(&storage),
            config.storage.max_upload_size_bytes,
        ));
        let listing_service = Arc::new(ListingService::new(Arc::clone(&repos.audio_files)));
        let search_service = Arc::new(SearchService::new(Arc::clone(&repos.audio_files)));
        let upload_service = Arc::new(UploadService::new(
            Arc::clone(&repos.audio_files),
            Arc::clone(&storage),
            config.storage.clone(),
        ));
        let audio = AudioService::new(Arc::clone(&repos.audio_files), Arc::clone(&storage));
        let download_service = Arc::new(DownloadService::new(audio.clone(), Arc::clone(&storage)));

        Self {
            config: Arc::new(config),
            repos,
            storage,
            jwt_decoder,
            registration_service,
            login_service,
            profile_service,
            listing_service,
            search_service,
            upload_service,
            audio_service: Arc::new(audio),
            download_service,
        }
    }
}
