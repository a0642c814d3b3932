//! Health status types for orchestrator probes.

use std::fmt;

use http::StatusCode;
use serde::{Serialize, Serializer};

/// Result of a single dependency probe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The dependency answered within its time budget.
    Connected,
    /// The dependency could not be reached; carries a human-readable reason.
    Failed(String),
}

impl Outcome {
    /// Create a failed outcome from anything printable.
    pub fn failed(reason: impl fmt::Display) -> Self {
        Self::Failed(reason.to_string())
    }

    /// Returns true if the dependency was reached.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Renders as `connected` or `error: <reason>`.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => write!(f, "connected"),
            Self::Failed(reason) => write!(f, "error: {}", reason),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregate health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Unhealthy,
}

impl Status {
    /// HTTP status code an orchestrator acts on.
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::Healthy => StatusCode::OK,
            Self::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Unhealthy => write!(f, "unhealthy"),
        }
    }
}
