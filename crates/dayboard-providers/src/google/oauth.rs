//! OAuth 2.0 authorization-code flow for Google APIs.
//!
//! This module implements the web-server variant of the flow: the dashboard
//! sends the user to Google's consent page, Google redirects back to this
//! backend's callback route, and the handler exchanges the returned code for
//! access and refresh tokens.
//!
//! # Flow Overview
//!
//! 1. Build the authorization URL with a random state value
//! 2. The user grants permission in the browser
//! 3. Google redirects to the configured callback with the authorization code
//! 4. Exchange the code for access and refresh tokens
//!
//! The grant requests `access_type=offline` and `prompt=consent` so Google
//! returns a refresh token on every completed consent.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng as _;
use tracing::info;

use crate::error::{ProviderError, ProviderResult};
use crate::store::TokenRecord;

use super::config::OAuthCredentials;

/// Google OAuth endpoints.
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// OAuth client for Google APIs.
///
/// Handles authorization URL construction and the code-for-tokens exchange.
#[derive(Debug)]
pub struct OAuthClient {
    credentials: OAuthCredentials,
    http_client: reqwest::Client,
}

impl OAuthClient {
    /// Creates a new OAuth client with the given credentials.
    pub fn new(credentials: OAuthCredentials, timeout: Duration, user_agent: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("failed to create HTTP client");

        Self {
            credentials,
            http_client,
        }
    }

    /// Builds the Google consent-screen URL.
    ///
    /// A fresh `state` value is generated per call. The callback logs the
    /// value Google echoes back but has no session to validate it against.
    pub fn build_auth_url(&self, redirect_uri: &str, scopes: &[String]) -> String {
        let scope = scopes.join(" ");
        let state = generate_state();

        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&\
            state={}&access_type=offline&prompt=consent",
            GOOGLE_AUTH_URL,
            urlencoding::encode(&self.credentials.client_id),
            urlencoding::encode(redirect_uri),
            urlencoding::encode(&scope),
            urlencoding::encode(&state),
        )
    }

    /// Exchanges an authorization code for tokens.
    ///
    /// # Errors
    ///
    /// Returns an authentication error when Google rejects the code and an
    /// invalid-response error when the token payload cannot be decoded.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        scopes: &[String],
    ) -> ProviderResult<TokenRecord> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", redirect_uri),
        ];

        let response = self
            .http_client
            .post(GOOGLE_TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::network(format!("token exchange request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(ProviderError::authentication(format!(
                "token exchange failed ({}): {}",
                status, body
            )));
        }

        let token_response: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("invalid token response: {}", e))
        })?;

        info!("successfully obtained tokens");
        Ok(TokenRecord::new(
            token_response.access_token,
            token_response.refresh_token,
            token_response.expires_in,
            scopes.to_vec(),
        ))
    }
}

/// Generates a random state value for the authorization URL.
fn generate_state() -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..16).map(|_| rng.random()).collect();
    URL_SAFE_NO_PAD.encode(&bytes)
}

/// Response from Google's token endpoint.
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}
