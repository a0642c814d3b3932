//! Health check module for orchestrator probes.
//!
//! Provides two types of health checks:
//! - **Liveness**: Is the process alive? (restart container if failed)
//! - **Readiness**: Are the service and its dependencies reachable? (remove from LB if failed)
//!
//! Readiness runs every registered [`DependencyProbe`] once per request,
//! concurrently, and reduces the outcomes: one failed dependency makes the
//! whole verdict unhealthy (HTTP 503).
//!
//! # Kubernetes Integration
//!
//! ```yaml
//! livenessProbe:
//!   httpGet:
//!     path: /health/liveliness
//!     port: 8080
//!   periodSeconds: 10
//!
//! readinessProbe:
//!   httpGet:
//!     path: /health/readiness
//!     port: 8080
//!   # each call opens a real database connection
//!   periodSeconds: 15
//!   timeoutSeconds: 7
//! ```

mod database;
mod error;
mod http_service;
mod liveness;
mod probe;
mod readiness;
mod status;

use std::sync::Arc;

pub use database::DatabaseProbe;
pub use error::HealthError;
pub use http_service::HttpServiceProbe;
pub use liveness::{liveness, LivenessVerdict};
pub use probe::DependencyProbe;
pub use readiness::{AggregateVerdict, DependencyReport, ReadinessAggregator, BACKSTOP_GRACE};
pub use status::{Outcome, Status};

use crate::config::Config;

/// Build the readiness probe set: database first, then the sibling service.
pub fn readiness_from_config(config: &Config) -> Result<ReadinessAggregator, HealthError> {
    ReadinessAggregator::new()
        .with_probe(Arc::new(DatabaseProbe::new(&config.database)))?
        .with_probe(Arc::new(HttpServiceProbe::new(&config.sibling)))
}
