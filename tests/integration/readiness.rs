//! Readiness endpoint tests (/health/readiness)
//!
//! The database is either a closed loopback port (unreachable) or a
//! handshake-only PostgreSQL stand-in (reachable).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::helpers::*;
use health_sidecar::config::{Config, SiblingConfig};
use health_sidecar::health::{self, HttpServiceProbe, ReadinessAggregator};
use reqwest::StatusCode;

fn sibling(port: u16, timeout: Duration) -> SiblingConfig {
    SiblingConfig {
        name: "litellm".to_string(),
        host: "127.0.0.1".to_string(),
        port,
        path: "/v1/models".to_string(),
        timeout,
    }
}

/// Readiness with a reachable database and a real sibling probe
fn with_reachable_database(sibling: &SiblingConfig) -> ReadinessAggregator {
    ReadinessAggregator::new()
        .with_probe(Arc::new(StaticProbe::connected("database")))
        .unwrap()
        .with_probe(Arc::new(HttpServiceProbe::new(sibling)))
        .unwrap()
}

/// Build probes the way the binary does, from environment-style values
fn from_env_values(pairs: &[(&str, String)]) -> ReadinessAggregator {
    let map: HashMap<&str, String> = pairs.iter().cloned().collect();
    let config = Config::from_lookup(&|key: &str| map.get(key).cloned()).unwrap();
    health::readiness_from_config(&config).unwrap()
}

/// Scenario A: database unreachable, sibling healthy
#[tokio::test]
async fn test_database_unreachable() {
    let sibling_port = spawn_sibling(200, Duration::ZERO).await;
    let db_port = closed_port().await;

    let server = TestServer::start(from_env_values(&[
        ("DB_HOST", "127.0.0.1".to_string()),
        ("DB_PORT", db_port.to_string()),
        ("DB_SSLMODE", "disable".to_string()),
        ("DB_CONNECT_TIMEOUT", "2s".to_string()),
        ("SIBLING_HOST", "127.0.0.1".to_string()),
        ("PORT", sibling_port.to_string()),
    ]))
    .await;

    let (status, body) = server.get_json("/health/readiness").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_str_starts_with(&body["checks"]["database"], "error:");
    assert_eq!(body["checks"]["litellm"], "connected");
}

/// Environment pointing both probes at local stand-ins
fn local_env(db_port: u16, sibling_port: u16) -> Vec<(&'static str, String)> {
    vec![
        ("DB_HOST", "127.0.0.1".to_string()),
        ("DB_PORT", db_port.to_string()),
        ("DB_NAME", "app".to_string()),
        ("DB_USER", "svc".to_string()),
        ("DB_SSLMODE", "disable".to_string()),
        ("DB_CONNECT_TIMEOUT", "2s".to_string()),
        ("SIBLING_HOST", "127.0.0.1".to_string()),
        ("PORT", sibling_port.to_string()),
    ]
}

/// Scenario B: database reachable, sibling returns 500
#[tokio::test]
async fn test_sibling_server_error() {
    let db_port = spawn_postgres().await;
    let sibling_port = spawn_sibling(500, Duration::ZERO).await;
    let server = TestServer::start(from_env_values(&local_env(db_port, sibling_port))).await;

    let (status, body) = server.get_json("/health/readiness").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["database"], "connected");
    assert_eq!(body["checks"]["litellm"], "error: status code 500");
}

/// Scenario C: everything reachable
#[tokio::test]
async fn test_all_dependencies_healthy() {
    let db_port = spawn_postgres().await;
    let sibling_port = spawn_sibling(200, Duration::ZERO).await;
    let server = TestServer::start(from_env_values(&local_env(db_port, sibling_port))).await;

    let resp = server.get("/health/readiness").await;
    assert_status(&resp, StatusCode::OK);
    assert_header_starts_with(&resp, "content-type", "application/json");

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "status": "healthy",
            "checks": { "database": "connected", "litellm": "connected" }
        })
    );
}

/// Scenario D: sibling slower than its timeout
#[tokio::test]
async fn test_sibling_timeout() {
    let port = spawn_sibling(200, Duration::from_secs(10)).await;
    let server = TestServer::start(with_reachable_database(&sibling(
        port,
        Duration::from_millis(300),
    )))
    .await;

    let start = Instant::now();
    let (status, body) = server.get_json("/health/readiness").await;

    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["checks"]["database"], "connected");
    assert_str_starts_with(&body["checks"]["litellm"], "error:");
}

/// Checks always hold one entry per probe, whatever the outcomes
#[tokio::test]
async fn test_one_entry_per_probe() {
    let readiness = ReadinessAggregator::new()
        .with_probe(Arc::new(StaticProbe::connected("database")))
        .unwrap()
        .with_probe(Arc::new(StaticProbe::failed("litellm", "status code 404")))
        .unwrap()
        .with_probe(Arc::new(StaticProbe::connected("cache")))
        .unwrap();
    let server = TestServer::start(readiness).await;

    let (status, body) = server.get_json("/health/readiness").await;
    let checks = body["checks"].as_object().unwrap();

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(checks.len(), 3);
    assert!(checks.contains_key("database"));
    assert!(checks.contains_key("litellm"));
    assert!(checks.contains_key("cache"));
}

/// Repeated polls with unchanged dependencies give the same answer
#[tokio::test]
async fn test_readiness_is_idempotent() {
    let port = spawn_sibling(500, Duration::ZERO).await;
    let server = TestServer::start(with_reachable_database(&sibling(
        port,
        Duration::from_secs(2),
    )))
    .await;

    let first = server.get_json("/health/readiness").await;
    let second = server.get_json("/health/readiness").await;

    assert_eq!(first, second);
    assert_eq!(first.0, StatusCode::SERVICE_UNAVAILABLE);
}
