//! Credential record storage.
//!
//! This module defines the [`TokenStore`] abstraction that provider
//! implementations persist OAuth tokens through, keyed by account, and the
//! file-backed [`FileTokenStore`] that writes one JSON record per key.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ProviderError, ProviderResult};

/// Counter distinguishing temp files written by this process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A persisted OAuth token bundle for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// The access token for API requests.
    pub access_token: String,

    /// The refresh token, when the grant supplied one.
    pub refresh_token: Option<String>,

    /// When the access token expires.
    pub expires_at: Option<DateTime<Utc>>,

    /// The OAuth scopes that were granted.
    pub scopes: Vec<String>,

    /// When the tokens were issued.
    pub issued_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Creates a new record from OAuth token-endpoint response data.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        expires_in_secs: Option<i64>,
        scopes: Vec<String>,
    ) -> Self {
        let expires_at = expires_in_secs.map(|secs| {
            // Subtract a buffer so the token reads as expired slightly early
            Utc::now() + Duration::seconds(secs) - Duration::seconds(60)
        });

        Self {
            access_token: access_token.into(),
            refresh_token,
            expires_at,
            scopes,
            issued_at: Utc::now(),
        }
    }

    /// Returns true if the access token is expired or about to expire.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() >= expires_at,
            // If no expiry is set, assume it's valid (some tokens don't expire)
            None => false,
        }
    }

    /// Returns the time until the token expires, if known.
    pub fn time_until_expiry(&self) -> Option<Duration> {
        self.expires_at.map(|expires_at| expires_at - Utc::now())
    }
}

/// Keyed persistence for credential records.
///
/// Implementations read the backing state on every call rather than caching,
/// so callers always observe the current stored record.
pub trait TokenStore: Send + Sync {
    /// Loads the record stored under the given account key.
    ///
    /// Returns `Ok(None)` when no record exists. An unreadable or corrupt
    /// record is an error, not an absent one.
    fn load(&self, key: &str) -> ProviderResult<Option<TokenRecord>>;

    /// Persists a record under the given account key, replacing any existing one.
    fn save(&self, key: &str, record: &TokenRecord) -> ProviderResult<()>;

    /// Removes the record stored under the given account key, if present.
    fn delete(&self, key: &str) -> ProviderResult<()>;

    /// Returns true if a record exists under the given account key.
    fn contains(&self, key: &str) -> bool;
}

/// File-backed token store with one JSON record per account key.
///
/// Records live at `<dir>/<key>_token.json`. Saves are atomic: the record is
/// serialized to a uniquely-named temp file in the same directory and renamed
/// over the final path, so concurrent saves leave the last full record and a
/// reader never observes a partial file.
#[derive(Debug)]
pub struct FileTokenStore {
    /// Directory holding the record files.
    dir: PathBuf,
}

impl FileTokenStore {
    /// Creates a new store rooted at the given directory.
    ///
    /// The directory is created on the first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory records are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path a record for the given key is stored at.
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}_token.json", key))
    }

    /// Returns a temp path unique to this process and call.
    fn temp_path(&self, key: &str) -> PathBuf {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        self.dir
            .join(format!(".{}_token.{}.{}.tmp", key, process::id(), counter))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self, key: &str) -> ProviderResult<Option<TokenRecord>> {
        let path = self.record_path(key);
        if !path.exists() {
            debug!("no token record at {:?}", path);
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            ProviderError::configuration(format!("failed to read token record: {}", e))
        })?;

        let record: TokenRecord = serde_json::from_str(&content).map_err(|e| {
            ProviderError::configuration(format!("failed to parse token record: {}", e))
        })?;

        debug!("loaded token record from {:?}", path);
        Ok(Some(record))
    }

    fn save(&self, key: &str, record: &TokenRecord) -> ProviderResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ProviderError::configuration(format!("failed to create token directory: {}", e))
        })?;

        let content = serde_json::to_string_pretty(record).map_err(|e| {
            ProviderError::internal(format!("failed to serialize token record: {}", e))
        })?;

        // Write to a uniquely-named temp file first, then rename for atomicity
        let temp_path = self.temp_path(key);
        fs::write(&temp_path, &content).map_err(|e| {
            ProviderError::configuration(format!("failed to write token record: {}", e))
        })?;

        let path = self.record_path(key);
        fs::rename(&temp_path, &path).map_err(|e| {
            ProviderError::configuration(format!("failed to rename token record: {}", e))
        })?;

        // Set restrictive permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            let _ = fs::set_permissions(&path, perms);
        }

        debug!("saved token record to {:?}", path);
        Ok(())
    }

    fn delete(&self, key: &str) -> ProviderResult<()> {
        let path = self.record_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                ProviderError::configuration(format!("failed to remove token record: {}", e))
            })?;
            info!("removed token record at {:?}", path);
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.record_path(key).exists()
    }
}
