//! Axum middleware: the login guard and request logging.

pub mod auth;
pub mod compression;
pub mod logging;
