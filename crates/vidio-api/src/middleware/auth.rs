//! Login guard for routes that require an authenticated user.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use vidio_core::error::AppError;
use vidio_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Resolve the caller from an `Authorization: Bearer` header.
///
/// `Ok(None)` when no credentials were sent. A token that is malformed,
/// expired, or names a missing or inactive account is an error.
pub async fn resolve_context(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<RequestContext>, AppError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

    let claims = state.jwt_decoder.decode(token)?;

    let user = state
        .repos
        .users
        .find_by_id(claims.user_id())
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::authentication("User account is no longer active"))?;

    Ok(Some(RequestContext::for_user(&user)))
}

/// Rejects unauthenticated requests with 401 and stores the
/// [`RequestContext`] in the request extensions otherwise.
pub async fn require_login(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx = resolve_context(&state, request.headers())
        .await?
        .ok_or_else(|| AppError::authentication("Authentication credentials were not provided."))?;

    request.extensions_mut().insert(ctx);
    Ok(next.run(request).await)
}
