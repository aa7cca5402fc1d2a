//! Google Calendar provider configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// OAuth 2.0 credentials for Google API access.
///
/// Users must provide their own OAuth client ID and secret, as Google
/// requires registered applications for API access.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    /// The OAuth 2.0 client ID from Google Cloud Console.
    pub client_id: String,
    /// The OAuth 2.0 client secret from Google Cloud Console.
    pub client_secret: String,
}

/// Structure of Google's OAuth credentials JSON file.
///
/// Supports multiple formats:
/// 1. Google Cloud Console format with "web" or "installed" section
/// 2. Flat format with client_id and client_secret at root level
#[derive(Debug, Deserialize)]
pub struct GoogleCredentialsFile {
    /// Credentials for web applications.
    pub web: Option<NestedCredentials>,
    /// Credentials for installed (desktop) applications.
    pub installed: Option<NestedCredentials>,
    /// Direct client_id (flat format).
    pub client_id: Option<String>,
    /// Direct client_secret (flat format).
    pub client_secret: Option<String>,
}

/// OAuth credentials within a nested section of the credentials JSON file.
#[derive(Debug, Deserialize)]
pub struct NestedCredentials {
    /// The OAuth 2.0 client ID.
    pub client_id: String,
    /// The OAuth 2.0 client secret.
    pub client_secret: String,
    /// The project ID (optional, present in the JSON but not used).
    #[serde(default)]
    #[allow(dead_code)]
    pub project_id: Option<String>,
}

impl OAuthCredentials {
    /// Creates new OAuth credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Loads OAuth credentials from a Google Cloud Console JSON file.
    ///
    /// The file should be the JSON downloaded from the Google Cloud Console
    /// OAuth 2.0 credentials page. It contains either a "web" or "installed"
    /// section with the client_id and client_secret.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("failed to read credentials file: {}", e))?;
        Self::from_json(&content)
    }

    /// Parses OAuth credentials from a Google credentials JSON string.
    ///
    /// Supports multiple formats:
    /// 1. Google Cloud Console format: `{"web": {"client_id": "...", "client_secret": "..."}}`
    /// 2. Flat format: `{"client_id": "...", "client_secret": "..."}`
    pub fn from_json(json: &str) -> Result<Self, String> {
        let file: GoogleCredentialsFile = serde_json::from_str(json)
            .map_err(|e| format!("failed to parse credentials JSON: {}", e))?;

        // Try nested format first (web or installed section)
        if let Some(creds) = file.web.or(file.installed) {
            return Ok(Self::new(creds.client_id, creds.client_secret));
        }

        // Try flat format (client_id and client_secret at root level)
        if let (Some(client_id), Some(client_secret)) = (file.client_id, file.client_secret) {
            return Ok(Self::new(client_id, client_secret));
        }

        Err("credentials file must contain 'web'/'installed' section or 'client_id'/'client_secret' at root level".to_string())
    }

    /// Validates that the credentials are usable.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.client_id.is_empty() {
            return Err("client_id is required");
        }
        if self.client_secret.is_empty() {
            return Err("client_secret is required");
        }
        Ok(())
    }
}

/// Configuration for the Google Calendar provider.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Account key the credential record is stored under.
    ///
    /// Defaults to `"default"`.
    pub account: String,

    /// Path to the OAuth client credentials file (`client_secret.json`).
    ///
    /// The file is read lazily on each request that needs it, never cached.
    pub credentials_path: PathBuf,

    /// Redirect URI registered with Google for the web flow.
    pub redirect_uri: String,

    /// Calendar to fetch events from.
    ///
    /// Defaults to `"primary"`.
    pub calendar_id: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string for API requests.
    pub user_agent: String,

    /// OAuth scopes to request.
    ///
    /// Defaults to `["https://www.googleapis.com/auth/calendar.readonly"]`.
    pub scopes: Vec<String>,
}

impl GoogleConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default OAuth scope for read-only calendar access.
    pub const DEFAULT_SCOPE: &'static str = "https://www.googleapis.com/auth/calendar.readonly";

    /// Default calendar to fetch events from.
    pub const DEFAULT_CALENDAR: &'static str = "primary";

    /// Creates a new Google configuration.
    pub fn new(credentials_path: impl Into<PathBuf>, redirect_uri: impl Into<String>) -> Self {
        Self {
            account: "default".to_string(),
            credentials_path: credentials_path.into(),
            redirect_uri: redirect_uri.into(),
            calendar_id: Self::DEFAULT_CALENDAR.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("dayboard/{}", env!("CARGO_PKG_VERSION")),
            scopes: vec![Self::DEFAULT_SCOPE.to_string()],
        }
    }

    /// Returns the provider name for this account (e.g. `"google:work"`).
    pub fn provider_name(&self) -> String {
        format!("google:{}", self.account)
    }

    /// Sets the account key.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Sets the calendar to fetch events from.
    pub fn with_calendar_id(mut self, id: impl Into<String>) -> Self {
        self.calendar_id = id.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the OAuth scopes.
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.account.is_empty() {
            return Err("an account key is required".to_string());
        }

        if self.redirect_uri.is_empty() {
            return Err("a redirect URI is required".to_string());
        }

        if self.scopes.is_empty() {
            return Err("at least one OAuth scope is required".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GoogleConfig {
        GoogleConfig::new(
            "/tmp/client_secret.json",
            "http://localhost:5005/auth/callback",
        )
    }

    #[test]
    fn credentials_validation() {
        let valid = OAuthCredentials::new("test-client.apps.googleusercontent.com", "test-secret");
        assert!(valid.validate().is_ok());

        let empty_id = OAuthCredentials::new("", "secret");
        assert!(empty_id.validate().is_err());

        let empty_secret = OAuthCredentials::new("test-client.apps.googleusercontent.com", "");
        assert!(empty_secret.validate().is_err());
    }

    #[test]
    fn config_creation() {
        let config = test_config();
        assert_eq!(config.account, "default");
        assert_eq!(config.calendar_id, "primary");
        assert_eq!(config.scopes, vec![GoogleConfig::DEFAULT_SCOPE.to_string()]);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn config_provider_name() {
        assert_eq!(test_config().provider_name(), "google:default");
        assert_eq!(
            test_config().with_account("work").provider_name(),
            "google:work"
        );
    }

    #[test]
    fn config_validation() {
        assert!(test_config().validate().is_ok());

        let no_scopes = test_config().with_scopes(vec![]);
        assert!(no_scopes.validate().is_err());

        let no_account = test_config().with_account("");
        assert!(no_account.validate().is_err());
    }

    #[test]
    fn config_builder_methods() {
        let config = test_config()
            .with_account("work")
            .with_calendar_id("team@example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("dayboard-test/0.0");

        assert_eq!(config.account, "work");
        assert_eq!(config.calendar_id, "team@example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "dayboard-test/0.0");
    }

    #[test]
    fn credentials_from_json_web() {
        let json = r#"{
            "web": {
                "client_id": "web-id.apps.googleusercontent.com",
                "client_secret": "web-secret",
                "project_id": "my-project"
            }
        }"#;

        let creds = OAuthCredentials::from_json(json).unwrap();
        assert_eq!(creds.client_id, "web-id.apps.googleusercontent.com");
        assert_eq!(creds.client_secret, "web-secret");
    }

    #[test]
    fn credentials_from_json_installed() {
        let json = r#"{
            "installed": {
                "client_id": "test-id.apps.googleusercontent.com",
                "client_secret": "test-secret"
            }
        }"#;

        let creds = OAuthCredentials::from_json(json).unwrap();
        assert_eq!(creds.client_id, "test-id.apps.googleusercontent.com");
        assert_eq!(creds.client_secret, "test-secret");
    }

    #[test]
    fn credentials_from_json_flat() {
        let json = r#"{
            "client_id": "flat-id.apps.googleusercontent.com",
            "client_secret": "flat-secret",
            "token": "some-token",
            "refresh_token": "some-refresh-token"
        }"#;

        let creds = OAuthCredentials::from_json(json).unwrap();
        assert_eq!(creds.client_id, "flat-id.apps.googleusercontent.com");
        assert_eq!(creds.client_secret, "flat-secret");
    }

    #[test]
    fn credentials_from_json_invalid() {
        let json = r#"{ "other": {} }"#;
        let result = OAuthCredentials::from_json(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("client_id"));
    }

    #[test]
    fn credentials_from_json_malformed() {
        let json = "not json";
        let result = OAuthCredentials::from_json(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("parse"));
    }

    #[test]
    fn credentials_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client_secret.json");
        std::fs::write(
            &path,
            r#"{"web": {"client_id": "file-id.apps.googleusercontent.com", "client_secret": "file-secret"}}"#,
        )
        .unwrap();

        let creds = OAuthCredentials::from_file(&path).unwrap();
        assert_eq!(creds.client_id, "file-id.apps.googleusercontent.com");

        let missing = OAuthCredentials::from_file(dir.path().join("nope.json"));
        assert!(missing.is_err());
    }
}
