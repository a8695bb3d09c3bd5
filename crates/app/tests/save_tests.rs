//! Save adapter integration tests.
//!
//! Verifies the fire-and-forget contract: exactly one insert with the
//! listing's fields and the caller's user id, and quiet completion when
//! the store rejects the write.

use std::sync::Arc;

use secrecy::SecretString;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use harvest_app::handle_save_job;
use harvest_client::JobRecord;
use harvest_store::StoreClient;

async fn signed_in_store(server: &MockServer) -> Arc<StoreClient> {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "jwt-token",
            "user": { "id": "u-1", "email": "user@example.com" }
        })))
        .mount(server)
        .await;

    let store = StoreClient::builder()
        .base_url(server.uri())
        .anon_key(SecretString::new("anon-key".to_string().into()))
        .build()
        .unwrap();
    let password = SecretString::new("hunter2".to_string().into());
    store.sign_in("user@example.com", &password).await.unwrap();
    Arc::new(store)
}

fn listing() -> JobRecord {
    JobRecord {
        title: "Backend Engineer".to_string(),
        company: "Acme".to_string(),
        location: Some("Remote".to_string()),
        posted_date: Some("3 days ago".to_string()),
        description: Some("Build services.".to_string()),
        url: Some("https://jobs.example.com/1".to_string()),
        source_portal: Some("wuzzuf".to_string()),
    }
}

#[tokio::test]
async fn test_save_inserts_one_record_with_listing_fields() {
    let mock_server = MockServer::start().await;
    let store = signed_in_store(&mock_server).await;

    // The persisted record carries the listing's fields plus the caller's
    // user id; the posted date and source portal are display-only.
    Mock::given(method("POST"))
        .and(path("/rest/v1/saved_jobs"))
        .and(header("authorization", "Bearer jwt-token"))
        .and(body_json(serde_json::json!({
            "user_id": "u-1",
            "job_title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "description": "Build services.",
            "url": "https://jobs.example.com/1"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let handle = handle_save_job(store, &listing(), "u-1");
    handle.await.expect("save task should not panic");
}

#[tokio::test]
async fn test_failing_store_completes_without_surfacing() {
    let mock_server = MockServer::start().await;
    let store = signed_in_store(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/saved_jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("storage unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The task logs the failure and resolves; nothing propagates.
    let handle = handle_save_job(store, &listing(), "u-1");
    handle.await.expect("save task should not panic");
}
