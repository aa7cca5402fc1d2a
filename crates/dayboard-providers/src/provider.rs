//! CalendarProvider trait definition.
//!
//! This module defines the [`CalendarProvider`] trait, which is the
//! abstraction the HTTP layer talks to. Providers are responsible for:
//!
//! - Building the authorization URL for the OAuth consent screen
//! - Exchanging authorization codes and persisting the resulting tokens
//! - Fetching events and mapping them for display

use std::future::Future;
use std::pin::Pin;

use dayboard_core::{DisplayEvent, TimeWindow};

use crate::error::{ProviderError, ProviderResult};

/// Options for fetching events.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Time window to fetch events for. Providers default to the next
    /// 24 hours when unset.
    pub time_window: Option<TimeWindow>,
    /// Calendar to fetch from. Provider default when unset.
    pub calendar_id: Option<String>,
    /// Whether to expand recurring events into instances.
    pub expand_recurring: bool,
}

impl FetchOptions {
    /// Creates new fetch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set time window.
    pub fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    /// Builder method to set the calendar ID.
    pub fn with_calendar_id(mut self, id: impl Into<String>) -> Self {
        self.calendar_id = Some(id.into());
        self
    }

    /// Builder method to control recurring event expansion.
    pub fn with_expand_recurring(mut self, expand: bool) -> Self {
        self.expand_recurring = expand;
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            time_window: None,
            calendar_id: None,
            expand_recurring: true,
        }
    }
}

/// A boxed future for async trait methods.
///
/// This is used because async functions in traits are not yet stable in a way
/// that works well with dynamic dispatch. Using boxed futures allows the trait
/// to be object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The abstraction for calendar backends.
///
/// # Implementation Notes
///
/// - Implementations should be `Send + Sync` for use in async contexts
/// - `fetch_events` should expand recurring events if `expand_recurring` is set
/// - Authentication state lives in the backing store, not in memory, so
///   `is_authenticated` reflects the stored state at call time
pub trait CalendarProvider: Send + Sync {
    /// Returns the name of this provider (e.g., "google:default").
    fn name(&self) -> &str;

    /// Builds the URL the user must visit to grant calendar access.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the OAuth client credentials are
    /// missing or unreadable.
    fn authorization_url(&self) -> ProviderResult<String>;

    /// Exchanges an authorization code for tokens and persists them.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the exchange is rejected, the network
    /// fails, or the record cannot be persisted.
    fn complete_authorization(&self, code: &str) -> BoxFuture<'_, ProviderResult<()>>;

    /// Returns true if a stored credential exists for this provider.
    fn is_authenticated(&self) -> bool;

    /// Fetches events mapped for display.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on network errors, authentication failures,
    /// or undecodable provider payloads.
    fn fetch_events(
        &self,
        options: FetchOptions,
    ) -> BoxFuture<'_, ProviderResult<Vec<DisplayEvent>>>;
}

/// A provider that serves a fixed set of events.
///
/// Useful for tests and for local development without a real calendar API.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    name: String,
    auth_url: String,
    authenticated: bool,
    events: Vec<DisplayEvent>,
}

impl StaticProvider {
    /// Creates a new static provider with no events.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auth_url: String::new(),
            authenticated: false,
            events: Vec::new(),
        }
    }

    /// Builder method to set the authorization URL.
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Builder method to set the authenticated flag.
    pub fn with_authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    /// Builder method to set the served events.
    pub fn with_events(mut self, events: Vec<DisplayEvent>) -> Self {
        self.events = events;
        self
    }
}

impl CalendarProvider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn authorization_url(&self) -> ProviderResult<String> {
        Ok(self.auth_url.clone())
    }

    fn complete_authorization(&self, _code: &str) -> BoxFuture<'_, ProviderResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn fetch_events(
        &self,
        _options: FetchOptions,
    ) -> BoxFuture<'_, ProviderResult<Vec<DisplayEvent>>> {
        let events = self.events.clone();
        Box::pin(async move { Ok(events) })
    }
}

/// A provider that always returns an error.
///
/// This is useful for testing or as a placeholder when a provider
/// fails to initialize.
#[derive(Debug)]
pub struct ErrorProvider {
    name: String,
    error: ProviderError,
}

impl ErrorProvider {
    /// Creates a new error provider.
    pub fn new(name: impl Into<String>, error: ProviderError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }

    // Clone the error details since we can't clone ProviderError directly
    fn make_error(&self) -> ProviderError {
        ProviderError::new(self.error.code(), self.error.message()).with_provider(&self.name)
    }
}

impl CalendarProvider for ErrorProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn authorization_url(&self) -> ProviderResult<String> {
        Err(self.make_error())
    }

    fn complete_authorization(&self, _code: &str) -> BoxFuture<'_, ProviderResult<()>> {
        let error = self.make_error();
        Box::pin(async move { Err(error) })
    }

    fn is_authenticated(&self) -> bool {
        false
    }

    fn fetch_events(
        &self,
        _options: FetchOptions,
    ) -> BoxFuture<'_, ProviderResult<Vec<DisplayEvent>>> {
        let error = self.make_error();
        Box::pin(async move { Err(error) })
    }
}
