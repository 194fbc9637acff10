//! Pagination query parameter extractor.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use vidio_core::types::pagination::PageRequest;
use vidio_service::AUDIO_PAGE_SIZE;

use crate::dto::request::PageParams;

/// The requested listing page. Never rejects.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PageParams>::try_from_uri(&parts.uri)
            .map(|Query(p)| p)
            .unwrap_or_default();
        Ok(Pagination(PageRequest::parse(
            params.page.as_deref(),
            AUDIO_PAGE_SIZE,
        )))
    }
}
