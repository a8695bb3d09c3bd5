//! Configuration loading for Job Harvest.
//!
//! Responsibilities:
//! - Provide a builder (`ConfigLoader`) that layers defaults, `.env`,
//!   process environment and explicit overrides into a final [`Config`].
//! - Validate and normalize base URLs and bound the search timeout.
//!
//! Does NOT handle:
//! - Session persistence (see `session` module).
//!
//! Invariants:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Explicit overrides (`with_*`) win over environment values.

mod env;
mod error;

pub use error::ConfigError;

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::MAX_SEARCH_TIMEOUT_SECS;
use crate::types::{Config, Credentials, SearchServiceConfig, StoreConfig};
use env::apply_env;

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    api_url: Option<String>,
    timeout: Option<Duration>,
    store_url: Option<String>,
    store_key: Option<SecretString>,
    email: Option<String>,
    password: Option<SecretString>,
}

impl ConfigLoader {
    /// Create a new loader with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent
    /// secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply environment variables (HARVEST_API_URL, HARVEST_TIMEOUT, ...).
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Override the aggregation-service base URL (highest priority).
    pub fn with_api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Override the search request timeout (highest priority).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the store base URL (highest priority).
    pub fn with_store_url(mut self, url: String) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Override the store anon key (highest priority).
    pub fn with_store_key(mut self, key: String) -> Self {
        self.store_key = Some(SecretString::new(key.into()));
        self
    }

    pub(crate) fn set_api_url(&mut self, url: Option<String>) {
        self.api_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_store_url(&mut self, url: Option<String>) {
        self.store_url = url;
    }

    pub(crate) fn set_store_key(&mut self, key: Option<SecretString>) {
        self.store_key = key;
    }

    pub(crate) fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    /// Validate a base URL and normalize it by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(var: &str, raw: String) -> Result<String, ConfigError> {
        let parsed = url::Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            message: format!("{} ({})", e, var),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw,
                message: format!("scheme must be http or https ({})", var),
            });
        }
        Ok(raw.trim_end_matches('/').to_string())
    }

    /// Build the final [`Config`], applying defaults where nothing was set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for unparseable or non-HTTP
    /// base URLs, and [`ConfigError::InvalidTimeout`] for a zero or
    /// out-of-bounds timeout.
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();

        let api_url = match self.api_url {
            Some(url) => Self::normalize_base_url("HARVEST_API_URL", url)?,
            None => defaults.search.base_url,
        };
        let store_url = match self.store_url {
            Some(url) => Self::normalize_base_url("HARVEST_STORE_URL", url)?,
            None => defaults.store.base_url,
        };

        let timeout = self.timeout.unwrap_or(defaults.search.timeout);
        if timeout.is_zero() || timeout.as_secs() > MAX_SEARCH_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "must be between 1 and {} seconds (got {})",
                    MAX_SEARCH_TIMEOUT_SECS,
                    timeout.as_secs()
                ),
            });
        }

        let credentials = match (self.email, self.password) {
            (Some(email), Some(password)) => Some(Credentials { email, password }),
            _ => None,
        };

        Ok(Config {
            search: SearchServiceConfig {
                base_url: api_url,
                timeout,
            },
            store: StoreConfig {
                base_url: store_url,
                anon_key: self.store_key,
            },
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let config = ConfigLoader::new().build().unwrap();
        assert_eq!(config.search.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.search.timeout, Duration::from_secs(10));
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_build_normalizes_trailing_slash() {
        let config = ConfigLoader::new()
            .with_api_url("http://jobs.example.com:8000/".to_string())
            .build()
            .unwrap();
        assert_eq!(config.search.base_url, "http://jobs.example.com:8000");
    }

    #[test]
    fn test_build_rejects_unparseable_url() {
        let err = ConfigLoader::new()
            .with_api_url("not a url".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_build_rejects_non_http_scheme() {
        let err = ConfigLoader::new()
            .with_api_url("ftp://jobs.example.com".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_build_rejects_zero_timeout() {
        let err = ConfigLoader::new()
            .with_timeout(Duration::from_secs(0))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn test_build_rejects_oversized_timeout() {
        let err = ConfigLoader::new()
            .with_timeout(Duration::from_secs(MAX_SEARCH_TIMEOUT_SECS + 1))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn test_credentials_require_both_email_and_password() {
        let mut loader = ConfigLoader::new();
        loader.set_email(Some("user@example.com".to_string()));
        let config = loader.build().unwrap();
        assert!(config.credentials.is_none());
    }
}
