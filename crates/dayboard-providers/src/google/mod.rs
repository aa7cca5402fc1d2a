//! Google Calendar provider implementation.
//!
//! This module provides a [`GoogleProvider`] that fetches events from
//! Google Calendar using the Calendar API v3 and authenticates with the
//! OAuth 2.0 web-server flow.
//!
//! # Authentication Flow
//!
//! 1. The dashboard asks the backend for an authorization URL
//! 2. The user grants access on Google's consent page
//! 3. Google redirects to the backend's callback route with a code
//! 4. The backend exchanges the code for tokens and persists them
//! 5. Subsequent schedule fetches use the stored access token
//!
//! The OAuth client credentials (`client_secret.json`) are read from disk on
//! every request rather than cached at startup, so dropping the file into
//! place works without a restart.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use dayboard_providers::FileTokenStore;
//! use dayboard_providers::google::{GoogleConfig, GoogleProvider};
//!
//! let config = GoogleConfig::new(
//!     "/app/credentials/client_secret.json",
//!     "http://localhost:5005/auth/callback",
//! );
//! let store = Arc::new(FileTokenStore::new("/app/credentials/tokens"));
//! let provider = GoogleProvider::new(config, store)?;
//!
//! let url = provider.authorization_url()?;
//! ```

mod client;
mod config;
mod oauth;
mod provider;

pub use client::GoogleCalendarClient;
pub use config::{GoogleConfig, OAuthCredentials};
pub use oauth::OAuthClient;
pub use provider::GoogleProvider;
