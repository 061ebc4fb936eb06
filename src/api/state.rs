// ABOUTME: Deployment lifecycle states reported by the platform.
// ABOUTME: Unknown values are preserved verbatim so they can be logged and reported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress marker of a deployment.
///
/// `READY` and `ERROR` are terminal. `CANCELED` is terminal only when the
/// caller opts to treat it as ready.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeploymentState {
    Queued,
    Initializing,
    Building,
    Ready,
    Error,
    Canceled,
    Other(String),
}

impl DeploymentState {
    pub fn as_str(&self) -> &str {
        match self {
            DeploymentState::Queued => "QUEUED",
            DeploymentState::Initializing => "INITIALIZING",
            DeploymentState::Building => "BUILDING",
            DeploymentState::Ready => "READY",
            DeploymentState::Error => "ERROR",
            DeploymentState::Canceled => "CANCELED",
            DeploymentState::Other(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        *self == DeploymentState::Error
    }

    /// Whether polling can stop with a successful result.
    pub fn is_ready(&self, canceled_as_ready: bool) -> bool {
        match self {
            DeploymentState::Ready => true,
            DeploymentState::Canceled => canceled_as_ready,
            _ => false,
        }
    }
}

impl From<String> for DeploymentState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "QUEUED" => DeploymentState::Queued,
            "INITIALIZING" => DeploymentState::Initializing,
            "BUILDING" => DeploymentState::Building,
            "READY" => DeploymentState::Ready,
            "ERROR" => DeploymentState::Error,
            "CANCELED" => DeploymentState::Canceled,
            _ => DeploymentState::Other(value),
        }
    }
}

impl From<DeploymentState> for String {
    fn from(state: DeploymentState) -> Self {
        match state {
            DeploymentState::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
