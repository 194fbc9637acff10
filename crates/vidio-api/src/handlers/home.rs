//! Landing page.

use axum::Json;

use crate::dto::response::{ApiResponse, HomeResponse};
use crate::extractors::MaybeAuthUser;

/// GET /
pub async fn home(MaybeAuthUser(ctx): MaybeAuthUser) -> Json<ApiResponse<HomeResponse>> {
    Json(ApiResponse::ok(HomeResponse {
        name: "vidio".to_string(),
        user: ctx.map(|c| c.username),
    }))
}
