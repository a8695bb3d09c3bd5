//! Command handlers.

pub mod auth;
pub mod saved;
pub mod search;

use anyhow::Result;

use harvest_config::{Config, PersistedSession, SessionFile};
use harvest_store::{AuthSession, StoreClient, UserIdentity};

/// Rebuild the in-memory session from its persisted form.
pub(crate) fn session_from_persisted(persisted: &PersistedSession) -> AuthSession {
    AuthSession {
        access_token: persisted.access_token.clone(),
        user: UserIdentity {
            id: persisted.user_id.clone(),
            email: Some(persisted.email.clone()),
        },
    }
}

/// Build a store client carrying the persisted session, if one exists.
///
/// Returns `None` when no session is persisted; callers decide how to
/// report that (most print a sign-in hint).
pub(crate) fn signed_in_store(config: &Config) -> Result<Option<(StoreClient, PersistedSession)>> {
    let session_file = SessionFile::locate()?;
    let Some(persisted) = session_file.load()? else {
        return Ok(None);
    };

    let store = StoreClient::builder()
        .from_config(config)
        .restored_session(session_from_persisted(&persisted))
        .build()?;

    Ok(Some((store, persisted)))
}

/// Hint printed when a command needs a session and none is persisted.
pub(crate) const SIGN_IN_HINT: &str = "Not signed in. Run `harvest login` first.";
