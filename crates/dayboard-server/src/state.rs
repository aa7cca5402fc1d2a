//! Shared application state.

use std::sync::Arc;

use dayboard_providers::CalendarProvider;

/// State handed to every request handler.
///
/// The provider itself is stateless between requests (credentials live in
/// the token store behind it), so cloning is a pair of pointer copies.
#[derive(Clone)]
pub struct AppState {
    /// Calendar backend the handlers talk to
    pub provider: Arc<dyn CalendarProvider>,
    /// Where the callback sends the browser after a completed consent
    pub dashboard_url: String,
}

impl AppState {
    /// Creates application state around the given provider.
    pub fn new(provider: Arc<dyn CalendarProvider>, dashboard_url: impl Into<String>) -> Self {
        Self {
            provider,
            dashboard_url: dashboard_url.into(),
        }
    }
}
