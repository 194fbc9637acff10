//! Registration and login handlers.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};

use vidio_service::forms::{LoginForm, RegisterForm};

use crate::dto::response::{ApiResponse, FormDescriptor, LoginResponse};
use crate::error::ApiError;
use crate::extractors::MaybeAuthUser;
use crate::state::AppState;

/// GET /register/
///
/// A logged-in caller has nothing to register and is sent home.
pub async fn register_form(MaybeAuthUser(ctx): MaybeAuthUser) -> Response {
    if ctx.is_some() {
        return Redirect::to("/").into_response();
    }
    Json(ApiResponse::ok(FormDescriptor::register())).into_response()
}

/// POST /register/
pub async fn register(
    State(state): State<AppState>,
    MaybeAuthUser(ctx): MaybeAuthUser,
    Form(form): Form<RegisterForm>,
) -> Result<Response, ApiError> {
    if ctx.is_some() {
        return Ok(Redirect::to("/").into_response());
    }
    state.registration_service.register(form).await?;
    Ok(Redirect::to("/login/").into_response())
}

/// POST /login/
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let outcome = state.login_service.login(form).await?;
    Ok(Json(ApiResponse::ok(LoginResponse::from(outcome))))
}
