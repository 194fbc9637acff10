//! # vidio-core
//!
//! Core crate for Vidio. Contains configuration schemas, pagination types,
//! the payload storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Vidio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
