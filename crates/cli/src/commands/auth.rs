//! Identity commands: login, signup, logout.
//!
//! Credentials come from configuration (HARVEST_EMAIL / HARVEST_PASSWORD,
//! or a `.env` file); the session established by login/signup is persisted
//! for later invocations and removed on logout.

use anyhow::{Context, Result};

use harvest_config::{Config, PersistedSession, SessionFile};
use harvest_store::StoreClient;

use crate::commands::signed_in_store;
use crate::error::ExitCode;

const CREDENTIALS_HINT: &str =
    "Set HARVEST_EMAIL and HARVEST_PASSWORD (environment or .env) to sign in.";

pub async fn login(config: Config) -> Result<ExitCode> {
    let Some(credentials) = config.credentials.clone() else {
        eprintln!("{}", CREDENTIALS_HINT);
        return Ok(ExitCode::ValidationError);
    };

    let store = StoreClient::builder().from_config(&config).build()?;
    let user = store
        .sign_in(&credentials.email, &credentials.password)
        .await?;

    persist_session(&store, &credentials.email)?;
    println!("Signed in as {}", user.email.as_deref().unwrap_or(&credentials.email));
    Ok(ExitCode::Success)
}

pub async fn signup(config: Config, name: String) -> Result<ExitCode> {
    let Some(credentials) = config.credentials.clone() else {
        eprintln!("{}", CREDENTIALS_HINT);
        return Ok(ExitCode::ValidationError);
    };

    let store = StoreClient::builder().from_config(&config).build()?;
    let user = store
        .sign_up(&credentials.email, &credentials.password, &name)
        .await?;

    persist_session(&store, &credentials.email)?;
    println!(
        "Account created for {} ({})",
        user.email.as_deref().unwrap_or(&credentials.email),
        name
    );
    Ok(ExitCode::Success)
}

pub async fn logout(config: Config) -> Result<ExitCode> {
    let Some((store, _persisted)) = signed_in_store(&config)? else {
        println!("Not signed in.");
        return Ok(ExitCode::Success);
    };

    // The persisted session is discarded even when the provider call
    // fails; a dead token on disk helps nobody.
    let result = store.sign_out().await;
    SessionFile::locate()?.clear()?;
    result?;

    println!("Signed out.");
    Ok(ExitCode::Success)
}

fn persist_session(store: &StoreClient, fallback_email: &str) -> Result<()> {
    let session = store
        .session()
        .current()
        .context("sign-in succeeded but no session was established")?;

    let persisted = PersistedSession {
        user_id: session.user.id.clone(),
        email: session
            .user
            .email
            .clone()
            .unwrap_or_else(|| fallback_email.to_string()),
        access_token: session.access_token,
    };

    SessionFile::locate()?.save(&persisted)?;
    Ok(())
}
