//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let database = match state.repos.health_check().await {
        Ok(true) => "connected",
        Ok(false) => "unavailable",
        Err(e) => {
            warn!(error = %e, "Record store health check failed");
            "unavailable"
        }
    };
    let storage = match state.storage.health_check().await {
        Ok(true) => "available",
        Ok(false) => "unavailable",
        Err(e) => {
            warn!(error = %e, "Storage health check failed");
            "unavailable"
        }
    };

    let healthy = database == "connected" && storage == "available";
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::ok(HealthResponse {
            status: if healthy { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
            storage: storage.to_string(),
        })),
    )
}
