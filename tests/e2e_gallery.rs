//! E2E tests for gallery load-more state endpoints

mod common;

use common::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_region_starts_zeroed() {
    let server = TestServer::new().await;

    let body: Value = server
        .client
        .get(&server.url("/api/gallery/photos-root"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["indexToView"], 0);
    assert_eq!(body["indexLoaded"], 0);
    assert_eq!(body["isLoading"], false);
    assert_eq!(body["attemptsExceeded"], false);
    assert_eq!(body["lastIndexToLoad"], Value::Null);
    assert_eq!(body["componentIds"], json!([]));
}

#[tokio::test]
async fn test_patch_updates_only_named_region() {
    let server = TestServer::new().await;

    let response = server
        .client
        .post(&server.url("/api/gallery/photos-grid"))
        .json(&json!({ "indexLoaded": 20, "isLoading": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["indexLoaded"], 20);
    assert_eq!(body["isLoading"], false);

    // The other region is unaffected.
    let root: Value = server
        .client
        .get(&server.url("/api/gallery/photos-root"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(root["indexLoaded"], 0);
}

#[tokio::test]
async fn test_rewinding_loaded_progress_is_rejected() {
    let server = TestServer::new().await;

    server
        .client
        .post(&server.url("/api/gallery/photos-root"))
        .json(&json!({ "indexLoaded": 20 }))
        .send()
        .await
        .unwrap();

    let response = server
        .client
        .post(&server.url("/api/gallery/photos-root"))
        .json(&json!({ "indexLoaded": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("indexLoaded"));
}

#[tokio::test]
async fn test_unknown_region_is_404() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/api/gallery/photos-sidebar"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_unknown_patch_fields_are_rejected() {
    let server = TestServer::new().await;

    let response = server
        .client
        .post(&server.url("/api/gallery/photos-root"))
        .json(&json!({ "indexloaded": 5 }))
        .send()
        .await
        .unwrap();

    // RegionPatch denies unknown fields, so a misspelled key is a 4xx
    // rather than a silent no-op.
    assert!(response.status().is_client_error());
}
