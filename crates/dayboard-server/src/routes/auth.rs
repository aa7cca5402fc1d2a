//! OAuth authorization endpoints.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/schedule/auth-url", get(auth_url))
        .route("/auth/callback", get(callback))
}

/// Response from the auth-url endpoint.
#[derive(Debug, Serialize)]
pub struct AuthUrlResponse {
    /// Consent-screen URL for the dashboard to open
    pub url: String,
}

/// Query parameters the provider appends to the callback redirect.
///
/// A missing `code` is rejected before the handler runs; `state` is echoed
/// back by the provider but carries nothing we depend on.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: String,
    #[serde(default)]
    state: Option<String>,
}

/// GET /api/schedule/auth-url - Build the consent-screen URL
async fn auth_url(State(state): State<AppState>) -> Result<Json<AuthUrlResponse>, ApiError> {
    let url = state.provider.authorization_url()?;
    Ok(Json(AuthUrlResponse { url }))
}

/// GET /auth/callback - Exchange the authorization code, then send the
/// browser back to the dashboard
async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(echoed) = params.state.as_deref() {
        debug!(state = %echoed, "callback carried provider state");
    }

    state.provider.complete_authorization(&params.code).await?;
    info!("authorization completed, redirecting to dashboard");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, state.dashboard_url.clone())],
    ))
}
