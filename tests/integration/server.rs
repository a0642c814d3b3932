//! Routing and lifecycle tests

use crate::helpers::*;
use health_sidecar::health::ReadinessAggregator;
use reqwest::StatusCode;

/// Unknown paths return 404 JSON
#[tokio::test]
async fn test_unknown_path() {
    let server = TestServer::start(ReadinessAggregator::new()).await;
    let resp = server.get("/health").await;

    assert_status(&resp, StatusCode::NOT_FOUND);
    assert_header_starts_with(&resp, "content-type", "application/json");
}

/// Non-GET methods on probe paths return 405 with Allow
#[tokio::test]
async fn test_post_not_allowed() {
    let server = TestServer::start(ReadinessAggregator::new()).await;
    let resp = server
        .client
        .post(format!("{}/health/readiness", server.base_url))
        .send()
        .await
        .unwrap();

    assert_status(&resp, StatusCode::METHOD_NOT_ALLOWED);
    assert_header_starts_with(&resp, "allow", "GET");
}

/// HEAD mirrors GET without a body
#[tokio::test]
async fn test_head_liveness() {
    let server = TestServer::start(ReadinessAggregator::new()).await;
    let resp = server
        .client
        .head(format!("{}/health/liveliness", server.base_url))
        .send()
        .await
        .unwrap();

    assert_status(&resp, StatusCode::OK);
    assert!(resp.bytes().await.unwrap().is_empty());
}

/// Shutdown stops the accept loop cleanly
#[tokio::test]
async fn test_graceful_stop() {
    let server = TestServer::start(ReadinessAggregator::new()).await;
    let (status, _) = server.get_json("/health/liveliness").await;
    assert_eq!(status, StatusCode::OK);

    server.stop().await.expect("Server returned an error");
}
