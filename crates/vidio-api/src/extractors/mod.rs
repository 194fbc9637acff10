//! Custom Axum extractors.

pub mod auth;
pub mod multipart;
pub mod pagination;
pub mod path;
pub mod profile;
pub mod search;

pub use auth::{AuthUser, MaybeAuthUser};
pub use pagination::Pagination;
pub use path::parse_audio_id;
pub use profile::ProfileSubmission;
pub use search::SearchQuery;
