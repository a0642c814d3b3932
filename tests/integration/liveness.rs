//! Liveness endpoint tests (/health/liveliness)

use std::sync::Arc;
use std::time::Duration;

use crate::helpers::*;
use health_sidecar::config::SiblingConfig;
use health_sidecar::health::{HttpServiceProbe, ReadinessAggregator};
use reqwest::StatusCode;

/// Liveness returns 200 with a fixed JSON body
#[tokio::test]
async fn test_liveness_returns_healthy() {
    let server = TestServer::start(ReadinessAggregator::new()).await;
    let resp = server.get("/health/liveliness").await;

    assert_status(&resp, StatusCode::OK);
    assert_header_starts_with(&resp, "content-type", "application/json");
    assert_eq!(resp.text().await.unwrap(), r#"{"status":"healthy"}"#);
}

/// Liveness stays healthy while every dependency is down
#[tokio::test]
async fn test_liveness_independent_of_dependencies() {
    let sibling = SiblingConfig {
        name: "litellm".to_string(),
        host: "127.0.0.1".to_string(),
        port: closed_port().await,
        path: "/v1/models".to_string(),
        timeout: Duration::from_millis(500),
    };
    let readiness = ReadinessAggregator::new()
        .with_probe(Arc::new(StaticProbe::failed("database", "connection refused")))
        .unwrap()
        .with_probe(Arc::new(HttpServiceProbe::new(&sibling)))
        .unwrap();
    let server = TestServer::start(readiness).await;

    let (status, _) = server.get_json("/health/readiness").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, body) = server.get_json("/health/liveliness").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "healthy" }));
}
