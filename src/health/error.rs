//! Probe registration errors.

use std::fmt;

/// Error raised while assembling the readiness probe set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthError {
    /// Two probes were registered under the same report key.
    DuplicateProbe { name: String },
}

impl fmt::Display for HealthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthError::DuplicateProbe { name } => {
                write!(f, "probe '{}' is already registered", name)
            }
        }
    }
}

impl std::error::Error for HealthError {}
