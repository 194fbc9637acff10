//! Own-profile handlers.

use axum::Json;
use axum::extract::State;
use axum::response::Redirect;

use vidio_service::user::ProfileView;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ProfileSubmission};
use crate::state::AppState;

/// GET /profile/
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ProfileView>>, ApiError> {
    let view = state.profile_service.get(auth.context()).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// POST /profile/ (urlencoded, or multipart with an optional `avatar` picture)
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ProfileSubmission(form): ProfileSubmission,
) -> Result<Redirect, ApiError> {
    state.profile_service.update(auth.context(), form).await?;
    Ok(Redirect::to("/profile/"))
}
