//! Audio search by a single selected field.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use vidio_core::result::AppResult;
use vidio_database::AudioFileRepo;
use vidio_entity::audio::{AudioFile, SearchField};

/// The outcome of a search, echoing the inputs for redisplay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// The query as given, if any.
    pub query: Option<String>,
    /// The selector as given, or `village` when absent.
    pub search_by: String,
    /// Matching records, ordered by id.
    pub audio_files: Vec<AudioFile>,
}

/// Searches the audio catalogue.
#[derive(Debug, Clone)]
pub struct SearchService {
    audio_files: Arc<dyn AudioFileRepo>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(audio_files: Arc<dyn AudioFileRepo>) -> Self {
        Self { audio_files }
    }

    /// Run a search.
    ///
    /// A missing or empty query returns every record regardless of the
    /// selector. Otherwise records whose selected field contains the query,
    /// ignoring case, are returned; an unknown selector matches nothing.
    pub async fn search(
        &self,
        query: Option<&str>,
        search_by: Option<&str>,
    ) -> AppResult<SearchResults> {
        let selector = search_by.unwrap_or(SearchField::default().as_str());

        let audio_files = match query.filter(|q| !q.is_empty()) {
            None => self.audio_files.find_all().await?,
            Some(q) => match SearchField::parse(selector) {
                Some(field) => self.audio_files.search(field, q).await?,
                None => {
                    debug!(search_by = selector, "Unknown search field");
                    Vec::new()
                }
            },
        };

        Ok(SearchResults {
            query: query.map(String::from),
            search_by: selector.to_string(),
            audio_files,
        })
    }
}
