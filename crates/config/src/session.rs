//! On-disk persistence of the signed-in session.
//!
//! Responsibilities:
//! - Locate the session file in the platform config directory
//!   (overridable via `HARVEST_CONFIG_DIR` for tests and scripting).
//! - Load, save and remove the persisted session atomically.
//!
//! Does NOT handle:
//! - Identity operations themselves (see the store crate).
//! - In-memory session state during a run (see the store crate's session).
//!
//! Invariants:
//! - Saves are atomic: write to a temp file, then rename.
//! - A missing session file is not an error; `load()` returns `None`.
//! - The file stores a short-lived access token, never credentials.

use std::path::PathBuf;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::{ENV_CONFIG_DIR, SESSION_FILE_NAME};
use crate::loader::ConfigError;
use crate::types::secret_string;

/// A signed-in session as persisted between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Opaque user identifier assigned by the identity provider.
    pub user_id: String,
    /// Email the session was established for.
    pub email: String,
    /// Bearer token for store requests.
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
}

/// Handle to the session file location.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Resolve the session file location.
    ///
    /// `HARVEST_CONFIG_DIR` takes precedence; otherwise the platform config
    /// directory is used (e.g., `~/.config/harvest/session.json` on Linux).
    pub fn locate() -> Result<Self, ConfigError> {
        if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
            return Ok(Self {
                path: PathBuf::from(dir).join(SESSION_FILE_NAME),
            });
        }

        let proj_dirs = directories::ProjectDirs::from("", "", "harvest").ok_or_else(|| {
            ConfigError::ConfigDirUnavailable("no home directory available".to_string())
        })?;

        Ok(Self {
            path: proj_dirs.config_dir().join(SESSION_FILE_NAME),
        })
    }

    /// Build a handle for an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// The on-disk location of the session file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted session, if any.
    ///
    /// A missing file yields `Ok(None)`. An unreadable or unparseable file
    /// is reported so the caller can tell the user to log in again.
    pub fn load(&self) -> Result<Option<PersistedSession>, ConfigError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Io(e)),
        };

        let session: PersistedSession =
            serde_json::from_slice(&bytes).map_err(|e| ConfigError::InvalidValue {
                var: self.path.display().to_string(),
                message: format!("corrupt session file: {}", e),
            })?;
        Ok(Some(session))
    }

    /// Persist the session atomically.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the session file is never left in a partially written state.
    pub fn save(&self, session: &PersistedSession) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(session).map_err(|e| ConfigError::InvalidValue {
            var: self.path.display().to_string(),
            message: format!("failed to encode session: {}", e),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "Persisted session");
        Ok(())
    }

    /// Remove the persisted session. Missing files are ignored.
    pub fn clear(&self) -> Result<(), ConfigError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn sample_session() -> PersistedSession {
        PersistedSession {
            user_id: "u-123".to_string(),
            email: "user@example.com".to_string(),
            access_token: SecretString::new("token-abc".to_string().into()),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = SessionFile::at(dir.path().join("session.json"));

        file.save(&sample_session()).unwrap();
        let loaded = file.load().unwrap().expect("session should exist");

        assert_eq!(loaded.user_id, "u-123");
        assert_eq!(loaded.email, "user@example.com");
        assert_eq!(loaded.access_token.expose_secret(), "token-abc");
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let file = SessionFile::at(dir.path().join("session.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let file = SessionFile::at(path);
        assert!(file.load().is_err());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let file = SessionFile::at(dir.path().join("session.json"));

        file.save(&sample_session()).unwrap();
        file.clear().unwrap();
        file.clear().unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    #[serial_test::serial]
    fn test_locate_honors_config_dir_override() {
        temp_env::with_vars([(ENV_CONFIG_DIR, Some("/tmp/harvest-test"))], || {
            let file = SessionFile::locate().unwrap();
            assert_eq!(
                file.path(),
                &PathBuf::from("/tmp/harvest-test/session.json")
            );
        });
    }
}
