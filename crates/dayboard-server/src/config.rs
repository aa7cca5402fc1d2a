//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable overriding the bind address.
const ENV_BIND: &str = "DAYBOARD_BIND";
/// Environment variable pointing at the OAuth client credentials file.
const ENV_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
/// Environment variable overriding the credential record directory.
const ENV_TOKEN_DIR: &str = "DAYBOARD_TOKEN_DIR";
/// Environment variable overriding the OAuth redirect URI.
const ENV_REDIRECT_URI: &str = "DAYBOARD_REDIRECT_URI";
/// Environment variable overriding the post-consent dashboard URL.
const ENV_DASHBOARD_URL: &str = "DAYBOARD_DASHBOARD_URL";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Path to the OAuth client credentials file
    pub credentials_path: PathBuf,
    /// Directory credential records are stored in
    pub token_dir: PathBuf,
    /// Account key records are stored under
    pub account: String,
    /// Redirect URI registered with the OAuth client
    pub redirect_uri: String,
    /// Where the callback sends the browser after a completed consent
    pub dashboard_url: String,
}

impl ServerConfig {
    /// Default port the server listens on.
    pub const DEFAULT_PORT: u16 = 5005;

    /// Loads configuration from the environment, falling back to defaults.
    ///
    /// Unset variables keep their defaults; a set but unparsable bind
    /// address is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var(ENV_BIND) {
            config.bind_addr = bind
                .parse()
                .map_err(|e| format!("invalid {}: {}", ENV_BIND, e))?;
        }
        if let Ok(path) = std::env::var(ENV_CREDENTIALS) {
            config.credentials_path = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var(ENV_TOKEN_DIR) {
            config.token_dir = PathBuf::from(dir);
        }
        if let Ok(uri) = std::env::var(ENV_REDIRECT_URI) {
            config.redirect_uri = uri;
        }
        if let Ok(url) = std::env::var(ENV_DASHBOARD_URL) {
            config.dashboard_url = url;
        }

        Ok(config)
    }

    /// Sets the bind address.
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Sets the credentials file path.
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = path.into();
        self
    }

    /// Sets the credential record directory.
    pub fn with_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.token_dir = dir.into();
        self
    }

    /// Sets the account key.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Sets the OAuth redirect URI.
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = uri.into();
        self
    }

    /// Sets the post-consent dashboard URL.
    pub fn with_dashboard_url(mut self, url: impl Into<String>) -> Self {
        self.dashboard_url = url.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], Self::DEFAULT_PORT)),
            credentials_path: PathBuf::from("/app/credentials/client_secret.json"),
            token_dir: PathBuf::from("/app/credentials/tokens"),
            account: "default".to_string(),
            redirect_uri: format!("http://localhost:{}/auth/callback", Self::DEFAULT_PORT),
            dashboard_url: "http://localhost/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5005);
        assert_eq!(
            config.credentials_path,
            PathBuf::from("/app/credentials/client_secret.json")
        );
        assert_eq!(config.token_dir, PathBuf::from("/app/credentials/tokens"));
        assert_eq!(config.account, "default");
        assert_eq!(config.redirect_uri, "http://localhost:5005/auth/callback");
        assert_eq!(config.dashboard_url, "http://localhost/");
    }

    #[test]
    fn custom_config() {
        let config = ServerConfig::default()
            .with_bind_addr(SocketAddr::from(([127, 0, 0, 1], 8080)))
            .with_credentials_path("/etc/dayboard/client_secret.json")
            .with_token_dir("/var/lib/dayboard/tokens")
            .with_account("work")
            .with_redirect_uri("https://dayboard.example/auth/callback")
            .with_dashboard_url("https://dash.example/");

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.credentials_path,
            PathBuf::from("/etc/dayboard/client_secret.json")
        );
        assert_eq!(config.token_dir, PathBuf::from("/var/lib/dayboard/tokens"));
        assert_eq!(config.account, "work");
        assert_eq!(
            config.redirect_uri,
            "https://dayboard.example/auth/callback"
        );
        assert_eq!(config.dashboard_url, "https://dash.example/");
    }
}
