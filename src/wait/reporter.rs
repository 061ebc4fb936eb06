// ABOUTME: Observer for progress made while waiting.
// ABOUTME: Receives the discovered deployment, observed states, and recovered failures.

use super::LocatedDeployment;
use crate::api::DeploymentState;
use crate::diagnostics::Warning;
use crate::types::DeploymentId;

/// Mid-flight notifications. The final result is the return value of the run.
pub trait Reporter: Send {
    /// Phase one matched a deployment; phase two is about to start.
    fn deployment_found(&mut self, _deployment: &LocatedDeployment) {}

    /// A status response was read during phase two.
    fn state_observed(&mut self, _id: &DeploymentId, _state: &DeploymentState) {}

    /// A request failed in a way that will be retried.
    fn transient_failure(&mut self, _warning: &Warning) {}
}
