//! Process-wide identity session state.
//!
//! Responsibilities:
//! - Hold the current [`AuthSession`] (absent when signed out).
//! - Restrict mutation to the three identity operations (sign in, sign up,
//!   sign out) via `pub(crate)` setters used by the store client.
//!
//! Does NOT handle:
//! - Token exchange with the identity provider (see `endpoints::auth`).
//! - On-disk persistence of the session (see the config crate).
//!
//! Invariants:
//! - Consumers read the session; only the store client mutates it.
//! - Sign-out always clears the session, even if the provider call failed.

use std::sync::RwLock;

use crate::models::{AuthSession, UserIdentity};

/// Shared, read-mostly holder of the current session.
///
/// Initialized once at startup (empty, or restored from the persisted
/// session file) and torn down on sign-out.
#[derive(Debug, Default)]
pub struct SessionState {
    inner: RwLock<Option<AuthSession>>,
}

impl SessionState {
    /// Create an empty (signed-out) session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session state restored from a previously persisted session.
    pub fn restored(session: AuthSession) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }

    /// The current identity, if signed in.
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }

    /// The current session, if signed in.
    pub fn current(&self) -> Option<AuthSession> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    /// Whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.inner.read().expect("session lock poisoned").is_some()
    }

    pub(crate) fn set(&self, session: AuthSession) {
        *self.inner.write().expect("session lock poisoned") = Some(session);
    }

    pub(crate) fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn session() -> AuthSession {
        AuthSession {
            access_token: SecretString::new("token".to_string().into()),
            user: UserIdentity {
                id: "u-1".to_string(),
                email: Some("user@example.com".to_string()),
            },
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let state = SessionState::new();
        assert!(!state.is_signed_in());
        assert!(state.current_user().is_none());
    }

    #[test]
    fn test_set_then_clear_lifecycle() {
        let state = SessionState::new();

        state.set(session());
        assert!(state.is_signed_in());
        assert_eq!(state.current_user().unwrap().id, "u-1");

        state.clear();
        assert!(!state.is_signed_in());
    }

    #[test]
    fn test_restored_starts_signed_in() {
        let state = SessionState::restored(session());
        assert!(state.is_signed_in());
    }
}
