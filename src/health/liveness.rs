//! Liveness responder.

use serde::Serialize;

use super::Status;

/// Body of a liveness response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LivenessVerdict {
    pub status: Status,
}

/// Liveness probe: is the process scheduled and accepting connections?
///
/// Never touches a dependency, so it stays healthy while readiness fails.
pub fn liveness() -> LivenessVerdict {
    LivenessVerdict {
        status: Status::Healthy,
    }
}
