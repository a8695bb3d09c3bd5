//! Configuration types for Job Harvest.
//!
//! Responsibilities:
//! - Define connection settings for the job aggregation service.
//! - Define connection settings for the store (identity + persistence).
//! - Provide serialization helpers for `Duration` and secret values.
//!
//! Does NOT handle:
//! - Configuration loading from env/.env (see `loader` module).
//! - Session persistence (see `session` module).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Secret values use `secrecy::SecretString` to prevent accidental logging.
//! - `Config::default()` targets the local development stack.

use crate::constants::{
    DEFAULT_SEARCH_BASE_URL, DEFAULT_SEARCH_TIMEOUT_SECS, DEFAULT_STORE_BASE_URL,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
pub(crate) mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Module for serializing SecretString as strings.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Connection settings for the job aggregation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchServiceConfig {
    /// Base URL of the aggregation service (e.g., http://127.0.0.1:8000)
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for SearchServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
        }
    }
}

/// Connection settings for the store service (identity + record persistence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store service.
    pub base_url: String,
    /// Publishable (anon) API key sent with every store request.
    /// Optional because search-only usage never talks to the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "optional_secret", serialize_with = "serialize_optional_secret")]
    pub anon_key: Option<SecretString>,
}

fn optional_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(s.map(|s| SecretString::new(s.into())))
}

fn serialize_optional_secret<S>(
    secret: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use secrecy::ExposeSecret;
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_BASE_URL.to_string(),
            anon_key: None,
        }
    }
}

/// Credentials for identity operations (sign in / sign up).
///
/// Read from the environment; never persisted to disk.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Aggregation service settings.
    pub search: SearchServiceConfig,
    /// Store service settings.
    pub store: StoreConfig,
    /// Identity credentials, when configured.
    pub credentials: Option<Credentials>,
}
