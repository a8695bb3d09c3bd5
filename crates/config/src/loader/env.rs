//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Job Harvest configuration.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//! - Building the final Config (see mod.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_API_URL, ENV_EMAIL, ENV_PASSWORD, ENV_STORE_KEY, ENV_STORE_URL, ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over built-in defaults but not
/// over explicit CLI overrides applied afterwards.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_API_URL) {
        loader.set_api_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(url) = env_var_or_none(ENV_STORE_URL) {
        loader.set_store_url(Some(url));
    }
    if let Some(key) = env_var_or_none(ENV_STORE_KEY) {
        loader.set_store_key(Some(SecretString::new(key.into())));
    }
    if let Some(email) = env_var_or_none(ENV_EMAIL) {
        loader.set_email(Some(email));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key = "_HARVEST_TEST_VAR";

        let unset = env_var_or_none(key);
        assert!(unset.is_none(), "Unset env var should return None");

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none());
        });

        temp_env::with_vars([(key, Some("   "))], || {
            assert!(env_var_or_none(key).is_none());
        });

        temp_env::with_vars([(key, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key), Some("test-value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_apply_env_rejects_non_numeric_timeout() {
        temp_env::with_vars([(ENV_TIMEOUT, Some("soon"))], || {
            let mut loader = ConfigLoader::new();
            let err = apply_env(&mut loader).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == ENV_TIMEOUT));
        });
    }
}
