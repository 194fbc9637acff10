//! Route definitions.
//!
//! Public routes are open to everyone. Everything else sits behind the
//! login guard, which answers 401 before the handler runs.

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};

use crate::handlers;
use crate::middleware::auth::require_login;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router receives `AppState` and passes it to all handlers via
/// `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(profile_routes())
        .merge(audio_routes())
        .route_layer(from_fn_with_state(state.clone(), require_login));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .route(
            "/register/",
            get(handlers::auth::register_form).post(handlers::auth::register),
        )
        .route("/login/", post(handlers::auth::login))
        .route("/health", get(handlers::health::health))
}

fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile/",
        get(handlers::profile::get_profile).post(handlers::profile::update_profile),
    )
}

fn audio_routes() -> Router<AppState> {
    Router::new()
        .route("/audio_list/", get(handlers::audio::list_audio))
        .route(
            "/upload/",
            get(handlers::audio::upload_form).post(handlers::audio::upload_audio),
        )
        .route("/delete-audio/{id}/", post(handlers::audio::delete_audio))
        .route("/audio/{id}/file", get(handlers::audio::download_audio))
        .route("/search/", get(handlers::search::search_audio))
}
