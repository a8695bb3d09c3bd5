//! Wire models for the store service.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserIdentity {
    /// Opaque user identifier.
    pub id: String,
    pub email: Option<String>,
}

/// An authenticated session: identity plus the bearer token for record access.
#[derive(Clone)]
pub struct AuthSession {
    pub access_token: SecretString,
    pub user: UserIdentity,
}

// Manual Debug keeps the access token out of logs.
impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("access_token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

/// Token endpoint response (`/auth/v1/token`, `/auth/v1/signup`).
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub user: UserIdentity,
}

/// Insert shape for one saved-job record.
///
/// Built from a displayed listing plus the current identity at the moment
/// Save is invoked; not retained after the write. The posted date and
/// source portal are display-only and are not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct NewSavedJob {
    pub user_id: String,
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// One saved-job row as read back from the store.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedJob {
    pub id: String,
    pub user_id: String,
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Upsert shape (and row shape) for a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_auth_session_debug_redacts_token() {
        let session = AuthSession {
            access_token: SecretString::new("jwt-secret".to_string().into()),
            user: UserIdentity {
                id: "u-1".to_string(),
                email: Some("user@example.com".to_string()),
            },
        };

        let debug_output = format!("{:?}", session);
        assert!(!debug_output.contains("jwt-secret"));
        assert!(debug_output.contains("u-1"));
        assert_eq!(session.access_token.expose_secret(), "jwt-secret");
    }

    #[test]
    fn test_saved_job_row_parses() {
        let json = serde_json::json!({
            "id": "row-1",
            "user_id": "u-1",
            "job_title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "description": null,
            "url": "https://jobs.example.com/1",
            "created_at": "2025-06-01T12:00:00Z"
        });

        let row: SavedJob = serde_json::from_value(json).unwrap();
        assert_eq!(row.job_title, "Backend Engineer");
        assert!(row.description.is_none());
    }
}
