//! Route handlers organized by domain.

pub mod audio;
pub mod auth;
pub mod health;
pub mod home;
pub mod profile;
pub mod search;
