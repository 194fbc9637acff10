//! Search query extractor.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::dto::request::SearchParams;

/// `?q=&search_by=` read leniently: a repeated key keeps its last value and
/// an unreadable query string counts as empty. Never rejects.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery(pub SearchParams);

impl SearchQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => params.q = Some(value),
                "search_by" => params.search_by = Some(value),
                _ => {}
            }
        }
        SearchQuery(params)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SearchQuery {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(Self::from_pairs(pairs))
    }
}
