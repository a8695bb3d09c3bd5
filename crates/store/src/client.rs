//! Main store client and API methods.
//!
//! This module provides the primary [`StoreClient`] for identity operations
//! and record access. It owns the process-wide [`SessionState`]: the three
//! identity operations are the only mutation points, everything else reads.
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - On-disk session persistence (the caller bridges to the config crate)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use harvest_config::Config;
use harvest_config::constants::DEFAULT_STORE_BASE_URL;

use crate::endpoints::{auth, records};
use crate::error::{Result, StoreError};
use crate::models::{AuthSession, NewSavedJob, ProfileRecord, SavedJob, UserIdentity};
use crate::session::SessionState;

/// Default timeout for store requests.
const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Table holding saved-job records.
const SAVED_JOBS_TABLE: &str = "saved_jobs";

/// Table holding user-profile records.
const PROFILES_TABLE: &str = "profiles";

/// Client for the store service (identity + record persistence).
#[derive(Debug)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: Option<SecretString>,
    session: SessionState,
}

/// Builder for creating a new [`StoreClient`].
pub struct StoreClientBuilder {
    base_url: String,
    anon_key: Option<SecretString>,
    timeout: Duration,
    restored_session: Option<AuthSession>,
}

impl Default for StoreClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_BASE_URL.to_string(),
            anon_key: None,
            timeout: DEFAULT_STORE_TIMEOUT,
            restored_session: None,
        }
    }
}

impl StoreClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the store service.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the publishable (anon) API key.
    pub fn anon_key(mut self, key: SecretString) -> Self {
        self.anon_key = Some(key);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start with a session restored from the persisted session file.
    pub fn restored_session(mut self, session: AuthSession) -> Self {
        self.restored_session = Some(session);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.store.base_url.clone();
        self.anon_key = config.store.anon_key.clone();
        self
    }

    /// Build the [`StoreClient`] with the configured options.
    pub fn build(self) -> Result<StoreClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(StoreError::Misconfigured("base_url is required".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(StoreError::Transport)?;

        let session = match self.restored_session {
            Some(restored) => SessionState::restored(restored),
            None => SessionState::new(),
        };

        Ok(StoreClient {
            http,
            base_url,
            anon_key: self.anon_key,
            session,
        })
    }
}

impl StoreClient {
    /// Create a new client builder.
    pub fn builder() -> StoreClientBuilder {
        StoreClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The process-wide session state. Read-only for consumers; mutated
    /// only by the identity operations below.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn anon_key(&self) -> Result<&str> {
        self.anon_key
            .as_ref()
            .map(|k| k.expose_secret())
            .ok_or_else(|| {
                StoreError::Misconfigured("store anon key is required (HARVEST_STORE_KEY)".into())
            })
    }

    fn bearer(&self) -> Result<SecretString> {
        self.session
            .current()
            .map(|s| s.access_token)
            .ok_or(StoreError::NotAuthenticated)
    }

    /// Sign in with email and password. On success the session state is
    /// replaced with the new session.
    pub async fn sign_in(&self, email: &str, password: &SecretString) -> Result<UserIdentity> {
        let session =
            auth::sign_in(&self.http, &self.base_url, self.anon_key()?, email, password).await?;
        let user = session.user.clone();
        self.session.set(session);
        Ok(user)
    }

    /// Sign up with email, password and a display name.
    ///
    /// After the identity is created, the profile record
    /// `{user_id, email, name}` is upserted; a profile failure aborts the
    /// operation and the session is not established.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &SecretString,
        name: &str,
    ) -> Result<UserIdentity> {
        let session =
            auth::sign_up(&self.http, &self.base_url, self.anon_key()?, email, password).await?;

        let profile = ProfileRecord {
            user_id: session.user.id.clone(),
            email: session.user.email.clone(),
            name: Some(name.to_string()),
        };
        records::upsert(
            &self.http,
            &self.base_url,
            self.anon_key()?,
            &session.access_token,
            PROFILES_TABLE,
            &profile,
        )
        .await?;

        let user = session.user.clone();
        self.session.set(session);
        Ok(user)
    }

    /// Sign out. The local session is torn down even when the provider
    /// call fails; the provider error is still reported.
    pub async fn sign_out(&self) -> Result<()> {
        let Some(current) = self.session.current() else {
            return Ok(());
        };

        let result = auth::sign_out(
            &self.http,
            &self.base_url,
            self.anon_key()?,
            &current.access_token,
        )
        .await;

        self.session.clear();
        result
    }

    /// Insert one saved-job record. Requires a signed-in session.
    ///
    /// No uniqueness constraint is enforced at this layer; saving the same
    /// listing twice produces two records.
    pub async fn insert_saved_job(&self, record: &NewSavedJob) -> Result<()> {
        records::insert(
            &self.http,
            &self.base_url,
            self.anon_key()?,
            &self.bearer()?,
            SAVED_JOBS_TABLE,
            record,
        )
        .await
    }

    /// Select all saved-job records belonging to `user_id`.
    pub async fn saved_jobs(&self, user_id: &str) -> Result<Vec<SavedJob>> {
        records::select(
            &self.http,
            &self.base_url,
            self.anon_key()?,
            &self.bearer()?,
            SAVED_JOBS_TABLE,
            "user_id",
            user_id,
        )
        .await
    }

    /// Select the profile record for `user_id`, if one exists.
    pub async fn profile(&self, user_id: &str) -> Result<Option<ProfileRecord>> {
        let rows: Vec<ProfileRecord> = records::select(
            &self.http,
            &self.base_url,
            self.anon_key()?,
            &self.bearer()?,
            PROFILES_TABLE,
            "user_id",
            user_id,
        )
        .await?;
        Ok(rows.into_iter().next())
    }

    /// Update the display name on the profile record for `user_id`.
    pub async fn update_profile_name(&self, user_id: &str, name: &str) -> Result<()> {
        records::update(
            &self.http,
            &self.base_url,
            self.anon_key()?,
            &self.bearer()?,
            PROFILES_TABLE,
            "user_id",
            user_id,
            &serde_json::json!({ "name": name }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> StoreClient {
        StoreClient::builder()
            .base_url("http://127.0.0.1:54321".to_string())
            .anon_key(SecretString::new("anon".to_string().into()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = StoreClient::builder()
            .base_url("http://store.example.com/".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://store.example.com");
    }

    #[test]
    fn test_builder_rejects_empty_base_url() {
        let result = StoreClient::builder().base_url(String::new()).build();
        assert!(matches!(result.unwrap_err(), StoreError::Misconfigured(_)));
    }

    #[test]
    fn test_anon_key_required_for_record_access() {
        let client = StoreClient::builder().build().unwrap();
        assert!(matches!(
            client.anon_key().unwrap_err(),
            StoreError::Misconfigured(_)
        ));
    }

    #[tokio::test]
    async fn test_record_access_requires_session() {
        let client = test_client();
        let record = NewSavedJob {
            user_id: "u-1".to_string(),
            job_title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            description: None,
            url: None,
        };

        let err = client.insert_saved_job(&record).await.unwrap_err();
        assert!(matches!(err, StoreError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_sign_out_without_session_is_noop() {
        let client = test_client();
        assert!(client.sign_out().await.is_ok());
        assert!(!client.session().is_signed_in());
    }
}
