//! HTTP routes.

pub mod auth;
pub mod schedule;

use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::state::AppState;

/// Builds the application router with all routes and middleware.
///
/// The dashboard runs on a different origin and sends credentials, so the
/// CORS layer mirrors the request's origin, methods, and headers. The `*`
/// wildcard is not an option here: browsers reject it once credentials are
/// allowed, and tower-http panics on that combination.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .merge(auth::router())
        .merge(schedule::router())
        .with_state(state)
        .layer(cors)
}
