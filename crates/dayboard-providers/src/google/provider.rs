//! Google Calendar provider implementation.
//!
//! This module implements the [`CalendarProvider`] trait for Google Calendar.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};

use dayboard_core::{DisplayEvent, TimeWindow};

use crate::error::{ProviderError, ProviderResult};
use crate::normalize::display_events;
use crate::provider::{BoxFuture, CalendarProvider, FetchOptions};
use crate::store::TokenStore;

use super::client::GoogleCalendarClient;
use super::config::{GoogleConfig, OAuthCredentials};
use super::oauth::OAuthClient;

/// Google Calendar provider.
///
/// This provider fetches events from Google Calendar using the Calendar API
/// v3 and authenticates via the OAuth 2.0 web-server flow. It holds no token
/// state in memory: the credential record is read from the store on every
/// fetch and the client-secret artifact from disk on every auth operation.
pub struct GoogleProvider {
    config: GoogleConfig,
    display_name: String,
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for GoogleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleProvider")
            .field("config", &self.config)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

impl GoogleProvider {
    /// Creates a new Google provider with the given configuration and store.
    pub fn new(config: GoogleConfig, store: Arc<dyn TokenStore>) -> ProviderResult<Self> {
        config.validate().map_err(ProviderError::configuration)?;

        let display_name = config.provider_name();

        Ok(Self {
            config,
            display_name,
            store,
        })
    }

    /// Reads the OAuth client credentials from disk.
    ///
    /// The artifact is read on every call so the auth endpoints reflect the
    /// current filesystem state rather than what existed at startup.
    fn load_credentials(&self) -> ProviderResult<OAuthCredentials> {
        if !self.config.credentials_path.exists() {
            return Err(ProviderError::configuration(
                "client_secret.json not found on backend. Add it to the credentials directory.",
            ));
        }

        let credentials = OAuthCredentials::from_file(&self.config.credentials_path)
            .map_err(ProviderError::configuration)?;
        credentials.validate().map_err(ProviderError::configuration)?;
        Ok(credentials)
    }

    fn oauth_client(&self) -> ProviderResult<OAuthClient> {
        let credentials = self.load_credentials()?;
        Ok(OAuthClient::new(
            credentials,
            self.config.timeout,
            &self.config.user_agent,
        ))
    }

    async fn exchange_and_store(&self, code: &str) -> ProviderResult<()> {
        let oauth = self.oauth_client()?;
        let record = oauth
            .exchange_code(code, &self.config.redirect_uri, &self.config.scopes)
            .await?;

        self.store.save(&self.config.account, &record)?;
        info!(account = %self.config.account, "stored credential record");
        Ok(())
    }

    async fn fetch(&self, options: &FetchOptions) -> ProviderResult<Vec<DisplayEvent>> {
        let record = self
            .store
            .load(&self.config.account)?
            .ok_or_else(|| ProviderError::authentication("no stored credential for account"))?;

        if record.is_expired() {
            debug!(account = %self.config.account, "stored access token is past its expiry");
        }

        let window = options
            .time_window
            .clone()
            .unwrap_or_else(|| TimeWindow::from_now(Utc::now(), Duration::hours(24)));
        let calendar_id = options
            .calendar_id
            .as_deref()
            .unwrap_or(&self.config.calendar_id);

        let client = GoogleCalendarClient::new(
            &record.access_token,
            self.config.timeout,
            &self.config.user_agent,
        );
        let raw = client
            .list_events(calendar_id, &window, options.expand_recurring)
            .await?;

        Ok(display_events(&raw))
    }
}

impl CalendarProvider for GoogleProvider {
    fn name(&self) -> &str {
        &self.display_name
    }

    fn authorization_url(&self) -> ProviderResult<String> {
        let oauth = self.oauth_client()?;
        Ok(oauth.build_auth_url(&self.config.redirect_uri, &self.config.scopes))
    }

    fn complete_authorization(&self, code: &str) -> BoxFuture<'_, ProviderResult<()>> {
        let code = code.to_string();
        Box::pin(async move { self.exchange_and_store(&code).await })
    }

    fn is_authenticated(&self) -> bool {
        self.store.contains(&self.config.account)
    }

    fn fetch_events(
        &self,
        options: FetchOptions,
    ) -> BoxFuture<'_, ProviderResult<Vec<DisplayEvent>>> {
        Box::pin(async move { self.fetch(&options).await })
    }
}
