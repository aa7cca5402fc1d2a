//! Schedule endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use dayboard_core::ScheduleResponse;
use dayboard_providers::FetchOptions;

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/schedule", get(schedule))
}

/// GET /api/schedule - The day's events, or the not-authenticated sentinel
///
/// An unauthenticated provider is not an error: the dashboard polls this
/// endpoint before the user has ever signed in, so it gets an empty event
/// list plus a sentinel message and a 200.
async fn schedule(State(state): State<AppState>) -> Result<Json<ScheduleResponse>, ApiError> {
    if !state.provider.is_authenticated() {
        debug!("no stored credential, returning sentinel response");
        return Ok(Json(ScheduleResponse::not_authenticated()));
    }

    let events = state.provider.fetch_events(FetchOptions::new()).await?;
    debug!(count = events.len(), "serving schedule");
    Ok(Json(ScheduleResponse::with_events(events)))
}
