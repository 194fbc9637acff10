//! # vidio-storage
//!
//! Payload storage for uploaded audio and profile pictures. Records keep a
//! relative reference produced by [`naming::payload_path`] or
//! [`naming::avatar_path`]; the bytes live under the media root.

pub mod naming;
pub mod providers;

pub use naming::{avatar_path, content_type_for, payload_path};
pub use providers::local::LocalStorageProvider;
