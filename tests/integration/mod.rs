//! Integration tests for health_sidecar
//!
//! Each test starts the health server in-process on an ephemeral port and
//! points its probes at mock dependencies (a hyper sibling service, a closed
//! port for an unreachable database, or fixed-answer probes).
//!
//! Run with: cargo test --test integration


mod liveness;
mod readiness;
mod server;
