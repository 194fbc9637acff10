//! Core type definitions used across the Vidio workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
