//! Audio file domain entities.

pub mod model;
pub mod search;

pub use model::{AudioFile, CreateAudioFile, MAX_TITLE_CHARS, MAX_VILLAGE_CHARS};
pub use search::SearchField;
