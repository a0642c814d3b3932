//! health_sidecar - liveness and readiness endpoints for a containerized service.
//!
//! The sidecar answers two orchestrator probes over HTTP:
//!
//! - `GET /health/liveliness` always returns `200 {"status":"healthy"}`.
//! - `GET /health/readiness` probes every dependency (a PostgreSQL database and
//!   a co-located sibling HTTP service) and returns `200` when all of them are
//!   reachable, `503` otherwise, with a per-dependency `checks` report.
//!
//! # Architecture
//!
//! - [`config`] - environment configuration, read once at startup
//! - [`health`] - probes, outcomes and the readiness aggregator
//! - [`server`] - hyper HTTP/1 server and routing
//! - [`logging`] - JSON log formatting for `tracing`
//!
//! # Example
//!
//! ```rust,ignore
//! use health_sidecar::{config::Config, health, server::HealthServer};
//!
//! let config = Config::from_env()?;
//! let readiness = health::readiness_from_config(&config)?;
//! let listener = tokio::net::TcpListener::bind(config.server.listen_addr).await?;
//! HealthServer::new(readiness).serve(listener, std::future::pending()).await?;
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 (abc12345-dirty)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod health;
pub mod logging;
pub mod server;

// Re-exports for convenience
pub use config::Config;
pub use server::HealthServer;
