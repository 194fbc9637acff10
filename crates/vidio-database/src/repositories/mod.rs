//! PostgreSQL implementations of the repository traits.

pub mod admin_allowlist;
pub mod audio_file;
pub mod profile;
pub mod user;

pub use admin_allowlist::AdminAllowlistRepository;
pub use audio_file::AudioFileRepository;
pub use profile::ProfileRepository;
pub use user::UserRepository;
