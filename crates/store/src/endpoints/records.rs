//! Record endpoints (`/rest/v1`).
//!
//! Generic insert/update/select over the store's tables. Writes ask for
//! `return=minimal`; reads use PostgREST-style `eq.` filters. Callers pass
//! the bearer token of the signed-in session.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, StoreError};

fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url, table)
}

/// Insert one record into `table`.
pub(crate) async fn insert<T: Serialize>(
    client: &Client,
    base_url: &str,
    anon_key: &str,
    access_token: &SecretString,
    table: &str,
    record: &T,
) -> Result<()> {
    debug!(table, "Inserting record");

    let response = client
        .post(table_url(base_url, table))
        .header("apikey", anon_key)
        .bearer_auth(access_token.expose_secret())
        .header("Prefer", "return=minimal")
        .json(record)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(StoreError::from_response(response).await);
    }

    Ok(())
}

/// Insert-or-merge one record into `table` (upsert on the table's
/// uniqueness constraint).
pub(crate) async fn upsert<T: Serialize>(
    client: &Client,
    base_url: &str,
    anon_key: &str,
    access_token: &SecretString,
    table: &str,
    record: &T,
) -> Result<()> {
    debug!(table, "Upserting record");

    let response = client
        .post(table_url(base_url, table))
        .header("apikey", anon_key)
        .bearer_auth(access_token.expose_secret())
        .header("Prefer", "resolution=merge-duplicates,return=minimal")
        .json(record)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(StoreError::from_response(response).await);
    }

    Ok(())
}

/// Update records in `table` where `filter_column` equals `filter_value`.
pub(crate) async fn update<T: Serialize>(
    client: &Client,
    base_url: &str,
    anon_key: &str,
    access_token: &SecretString,
    table: &str,
    filter_column: &str,
    filter_value: &str,
    patch: &T,
) -> Result<()> {
    debug!(table, filter_column, "Updating records");

    let response = client
        .patch(table_url(base_url, table))
        .query(&[(filter_column, format!("eq.{}", filter_value))])
        .header("apikey", anon_key)
        .bearer_auth(access_token.expose_secret())
        .header("Prefer", "return=minimal")
        .json(patch)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(StoreError::from_response(response).await);
    }

    Ok(())
}

/// Select all records in `table` where `filter_column` equals `filter_value`.
pub(crate) async fn select<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    anon_key: &str,
    access_token: &SecretString,
    table: &str,
    filter_column: &str,
    filter_value: &str,
) -> Result<Vec<T>> {
    debug!(table, filter_column, "Selecting records");

    let response = client
        .get(table_url(base_url, table))
        .query(&[
            ("select", "*".to_string()),
            (filter_column, format!("eq.{}", filter_value)),
        ])
        .header("apikey", anon_key)
        .bearer_auth(access_token.expose_secret())
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(StoreError::from_response(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| StoreError::InvalidResponse(format!("{} rows: {}", table, e)))
}
