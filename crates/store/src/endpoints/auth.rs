//! Identity endpoints (`/auth/v1`).

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::models::{AuthSession, TokenResponse};

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

/// Exchange credentials for a session (`grant_type=password`).
pub(crate) async fn sign_in(
    client: &Client,
    base_url: &str,
    anon_key: &str,
    email: &str,
    password: &SecretString,
) -> Result<AuthSession> {
    debug!(email, "Signing in");

    let url = format!("{}/auth/v1/token?grant_type=password", base_url);
    let body = PasswordGrant {
        email,
        password: password.expose_secret(),
    };

    let response = client
        .post(&url)
        .header("apikey", anon_key)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(StoreError::from_response(response).await);
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| StoreError::InvalidResponse(format!("token response: {}", e)))?;

    Ok(AuthSession {
        access_token: SecretString::new(token.access_token.into()),
        user: token.user,
    })
}

/// Register a new identity.
pub(crate) async fn sign_up(
    client: &Client,
    base_url: &str,
    anon_key: &str,
    email: &str,
    password: &SecretString,
) -> Result<AuthSession> {
    debug!(email, "Signing up");

    let url = format!("{}/auth/v1/signup", base_url);
    let body = PasswordGrant {
        email,
        password: password.expose_secret(),
    };

    let response = client
        .post(&url)
        .header("apikey", anon_key)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(StoreError::from_response(response).await);
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| StoreError::InvalidResponse(format!("signup response: {}", e)))?;

    Ok(AuthSession {
        access_token: SecretString::new(token.access_token.into()),
        user: token.user,
    })
}

/// Invalidate the session's token on the provider side.
pub(crate) async fn sign_out(
    client: &Client,
    base_url: &str,
    anon_key: &str,
    access_token: &SecretString,
) -> Result<()> {
    debug!("Signing out");

    let url = format!("{}/auth/v1/logout", base_url);

    let response = client
        .post(&url)
        .header("apikey", anon_key)
        .bearer_auth(access_token.expose_secret())
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(StoreError::from_response(response).await);
    }

    Ok(())
}
