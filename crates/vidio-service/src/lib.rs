//! # vidio-service
//!
//! Business logic service layer for Vidio. Each service orchestrates
//! repositories, payload storage, and authentication to implement one
//! application-level use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod audio;
pub mod context;
pub mod forms;
pub mod user;

pub use audio::{
    AUDIO_PAGE_SIZE, AudioService, DownloadService, ListingService, SearchResults, SearchService,
    UploadService,
};
pub use context::RequestContext;
pub use user::{AllowlistService, LoginService, ProfileService, RegistrationService};
