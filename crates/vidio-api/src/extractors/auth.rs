//! Extractors for the calling user.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use vidio_core::error::AppError;
use vidio_service::RequestContext;

use crate::error::ApiError;
use crate::middleware::auth::resolve_context;
use crate::state::AppState;

/// The authenticated user, placed in the request by the login guard.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                AppError::authentication("Authentication credentials were not provided.").into()
            })
    }
}

/// The caller if valid credentials were sent, on routes open to everyone.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Bad credentials on a public route just mean "anonymous".
        let ctx = resolve_context(state, &parts.headers).await.ok().flatten();
        Ok(MaybeAuthUser(ctx))
    }
}
