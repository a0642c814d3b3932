//! Readiness aggregation over registered dependency probes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::join_all;
use http::StatusCode;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::{DependencyProbe, HealthError, Outcome, Status};

/// Extra time a probe gets past its own timeout before the aggregator gives up on it.
pub const BACKSTOP_GRACE: Duration = Duration::from_millis(500);

/// Per-dependency outcomes in registration order.
///
/// Serializes as a JSON object of `name -> "connected" | "error: <reason>"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    entries: Vec<(String, Outcome)>,
}

impl DependencyReport {
    /// Outcome recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outcome)> {
        self.entries
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    /// True when every dependency is connected (vacuously true when empty).
    pub fn all_connected(&self) -> bool {
        self.entries.iter().all(|(_, outcome)| outcome.is_connected())
    }
}

impl FromIterator<(String, Outcome)> for DependencyReport {
    fn from_iter<I: IntoIterator<Item = (String, Outcome)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for DependencyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, outcome) in &self.entries {
            map.serialize_entry(name, outcome)?;
        }
        map.end()
    }
}

/// Aggregate status plus the per-dependency report behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateVerdict {
    pub status: Status,
    pub checks: DependencyReport,
}

impl AggregateVerdict {
    /// Reduce a report: any failed dependency makes the whole verdict unhealthy.
    pub fn from_report(checks: DependencyReport) -> Self {
        let status = if checks.all_connected() {
            Status::Healthy
        } else {
            Status::Unhealthy
        };
        Self { status, checks }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == Status::Healthy
    }

    pub fn http_status(&self) -> StatusCode {
        self.status.http_status()
    }
}

/// Runs every registered probe once per readiness request.
///
/// Holds no state besides the probe list: each evaluation is independent and
/// idempotent.
#[derive(Default)]
pub struct ReadinessAggregator {
    probes: Vec<Arc<dyn DependencyProbe>>,
}

impl ReadinessAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a probe. Names must be unique.
    pub fn register(&mut self, probe: Arc<dyn DependencyProbe>) -> Result<(), HealthError> {
        if self.probes.iter().any(|p| p.name() == probe.name()) {
            return Err(HealthError::DuplicateProbe {
                name: probe.name().to_string(),
            });
        }
        self.probes.push(probe);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_probe(mut self, probe: Arc<dyn DependencyProbe>) -> Result<Self, HealthError> {
        self.register(probe)?;
        Ok(self)
    }

    /// Registered probe names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.probes.iter().map(|p| p.name())
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Probe all dependencies concurrently and reduce the outcomes.
    pub async fn evaluate(&self) -> AggregateVerdict {
        let outcomes = join_all(self.probes.iter().map(|probe| run_probe(probe.as_ref()))).await;

        let report: DependencyReport = self
            .probes
            .iter()
            .zip(outcomes)
            .map(|(probe, outcome)| (probe.name().to_string(), outcome))
            .collect();

        for (name, outcome) in report.iter() {
            if let Outcome::Failed(reason) = outcome {
                warn!(dependency = name, reason = %reason, "Dependency unavailable");
            }
        }

        AggregateVerdict::from_report(report)
    }
}

async fn run_probe(probe: &dyn DependencyProbe) -> Outcome {
    let start = Instant::now();
    let budget = probe.timeout().saturating_add(BACKSTOP_GRACE);

    let outcome = match timeout(budget, probe.check()).await {
        Ok(outcome) => outcome,
        Err(_) => Outcome::failed(format!("timed out after {:?}", probe.timeout())),
    };

    debug!(
        dependency = probe.name(),
        duration_ms = start.elapsed().as_millis() as u64,
        outcome = %outcome,
        "Dependency probed"
    );

    outcome
}
