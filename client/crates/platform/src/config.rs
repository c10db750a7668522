//! Client Configuration
//!
//! Where the backend lives and where the session is persisted.

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default API root used when `API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

/// Default session file used when `PORTAL_STATE_PATH` is unset
pub const DEFAULT_STATE_PATH: &str = ".portal/session.json";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL must use http or https: {0}")]
    UnsupportedScheme(String),
}

/// Portal client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:4000/api` (no trailing slash)
    pub base_url: String,
    /// File holding the persisted token and user
    pub state_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
        }
    }
}

impl ClientConfig {
    /// Create config for a given API root
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Read `API_URL` and `PORTAL_STATE_PATH`, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let state_path = env::var("PORTAL_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_PATH));

        Ok(Self {
            base_url: normalize_base_url(&base_url)?,
            state_path,
        })
    }

    /// Override the session file location
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Absolute URL for an API path such as `/members/42`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000/api");
        assert_eq!(config.state_path, PathBuf::from(".portal/session.json"));
    }

    #[test]
    fn test_url_for_keeps_api_prefix() {
        let config = ClientConfig::new("https://trust.example.org/api/").unwrap();
        assert_eq!(
            config.url_for("/schemes/7/apply"),
            "https://trust.example.org/api/schemes/7/apply"
        );
        assert_eq!(config.url_for("members"), "https://trust.example.org/api/members");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://trust.example.org"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }
}
