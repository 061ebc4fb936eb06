// ABOUTME: Failure taxonomy for a wait run, using the SNAFU pattern.
// ABOUTME: Display strings are the user-facing failure messages; kind() is for programs.

use snafu::Snafu;
use std::time::Duration;

use super::request::AccessDenied;
use crate::types::{CommitSha, DeploymentId};

/// Every way a run can end without a ready deployment.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum WaitError {
    #[snafu(display("{}", access_message(message, *invalid_token)))]
    Access { message: String, invalid_token: bool },

    #[snafu(display("Deployment {id} is in ERROR state. Failing immediately."))]
    ErroredOnDiscovery { id: DeploymentId },

    #[snafu(display("Deployment {id} is in ERROR state."))]
    Errored { id: DeploymentId },

    #[snafu(display(
        "Deployment with commit SHA {sha} was not found within the timeout period of {} seconds.",
        timeout.as_secs()
    ))]
    NotFound { sha: CommitSha, timeout: Duration },

    #[snafu(display(
        "Deployment did not reach a ready state within the specified timeout of: {} seconds",
        timeout.as_secs()
    ))]
    NotReady { timeout: Duration },
}

fn access_message(message: &str, invalid_token: bool) -> String {
    if invalid_token {
        format!("{message} (Invalid token detected.)")
    } else {
        message.to_string()
    }
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitErrorKind {
    /// Forbidden response; never retried.
    Access,
    /// The deployment itself failed.
    DeploymentError,
    /// No deployment for the commit appeared in time.
    NotFound,
    /// The deployment did not become ready in time.
    NotReady,
}

impl WaitErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitErrorKind::Access => "access",
            WaitErrorKind::DeploymentError => "deployment_error",
            WaitErrorKind::NotFound => "not_found",
            WaitErrorKind::NotReady => "not_ready",
        }
    }
}

impl WaitError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> WaitErrorKind {
        match self {
            WaitError::Access { .. } => WaitErrorKind::Access,
            WaitError::ErroredOnDiscovery { .. } | WaitError::Errored { .. } => {
                WaitErrorKind::DeploymentError
            }
            WaitError::NotFound { .. } => WaitErrorKind::NotFound,
            WaitError::NotReady { .. } => WaitErrorKind::NotReady,
        }
    }

    /// The failed deployment, when the failure concerns one.
    pub fn deployment_id(&self) -> Option<&DeploymentId> {
        match self {
            WaitError::ErroredOnDiscovery { id } | WaitError::Errored { id } => Some(id),
            _ => None,
        }
    }
}

impl From<AccessDenied> for WaitError {
    fn from(denied: AccessDenied) -> Self {
        WaitError::Access {
            message: denied.message,
            invalid_token: denied.invalid_token,
        }
    }
}
