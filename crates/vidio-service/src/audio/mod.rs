//! Audio catalogue services: listing, search, upload, deletion, and download.

pub mod download;
pub mod listing;
pub mod search;
pub mod service;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use download::{DownloadResult, DownloadService};
pub use listing::{AUDIO_PAGE_SIZE, ListingService};
pub use search::{SearchResults, SearchService};
pub use service::AudioService;
pub use upload::UploadService;
