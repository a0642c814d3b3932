//! Dependency probe trait.

use std::time::Duration;

use async_trait::async_trait;

use super::Outcome;

/// A reachability check against one external dependency.
///
/// Implementations must never panic or propagate errors: every failure is
/// reported as [`Outcome::Failed`]. They must also honor their own
/// [`timeout`](DependencyProbe::timeout); the aggregator cuts off probes that
/// overrun it by more than a short grace period.
#[async_trait]
pub trait DependencyProbe: Send + Sync {
    /// Key of this dependency in the readiness report.
    fn name(&self) -> &str;

    /// Time budget for a single [`check`](DependencyProbe::check).
    fn timeout(&self) -> Duration;

    /// Probe the dependency once.
    async fn check(&self) -> Outcome;
}
