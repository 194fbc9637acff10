//! Search handler.

use axum::Json;
use axum::extract::State;

use vidio_service::SearchResults;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::SearchQuery;
use crate::state::AppState;

/// GET /search/?q=...&search_by=...
pub async fn search_audio(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery,
) -> Result<Json<ApiResponse<SearchResults>>, ApiError> {
    let results = state
        .search_service
        .search(params.q.as_deref(), params.search_by.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(results)))
}
