//! Client configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://your-backend-api.com/api/";
pub const SESSION_FILE: &str = "aivyra_preferences.json";

/// Connect and request timeouts are fixed; no call overrides them.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("no config directory available; set AIVYRA_STORE_DIR")]
    NoStoreDir,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the `/api/` tree; endpoint paths are joined onto it.
    pub base_url: String,
    /// JSON file holding the persisted session.
    pub store_path: PathBuf,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Build a config for an explicit base URL, storing the session under the
    /// platform config directory.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let store_dir = default_store_dir().ok_or(ConfigError::NoStoreDir)?;
        Self::with_store_dir(base_url, store_dir)
    }

    pub fn with_store_dir(
        base_url: impl Into<String>,
        store_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let base_url = validate_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            store_path: store_dir.into().join(SESSION_FILE),
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
        })
    }

    /// Parse configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AIVYRA_API_BASE_URL`: backend `/api/` root (default: `https://your-backend-api.com/api/`)
    /// - `AIVYRA_STORE_DIR`: directory for the session file (default: `<config dir>/aivyra`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("AIVYRA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        match std::env::var("AIVYRA_STORE_DIR") {
            Ok(dir) if !dir.trim().is_empty() => Self::with_store_dir(base_url, dir),
            _ => Self::new(base_url),
        }
    }
}

/// `<config dir>/aivyra`, e.g. `~/.config/aivyra` on Linux.
pub fn default_store_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aivyra"))
}

fn validate_base_url(raw: String) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.clone(),
        reason,
    };

    let parsed = url::Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
    }

    // Relative joins need the trailing slash to keep the `/api/` segment.
    let mut normalized = parsed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
