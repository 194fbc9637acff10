//! # vidio-database
//!
//! Record store for Vidio. The `repos` traits are the seam services depend
//! on; `repositories` implements them on PostgreSQL and `memory` keeps
//! everything in process for tests and local development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repos;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use repos::{AdminAllowlistRepo, AudioFileRepo, ProfileRepo, UserRepo};
pub use store::Repositories;
