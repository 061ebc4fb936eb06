// ABOUTME: Phase two: poll one deployment until it is ready, failed, or out of time.
// ABOUTME: Shares the time budget already partly consumed by phase one.

use std::time::Duration;
use tracing::{debug, info, warn};

use super::budget::TimeBudget;
use super::error::WaitError;
use super::reporter::Reporter;
use super::request::{RetryOutcome, fetch};
use crate::api::{DeploymentDetails, DeploymentState, Endpoints, GetRequest, HttpGet};
use crate::types::{AccessToken, DeploymentId};

/// Final state of a deployment that reached a ready state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollResult {
    id: DeploymentId,
    url: String,
    state: DeploymentState,
    alias_error: Option<String>,
}

impl PollResult {
    pub fn id(&self) -> &DeploymentId {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> &DeploymentState {
        &self.state
    }

    /// Alias error text, empty when there was none.
    pub fn alias_error(&self) -> &str {
        self.alias_error.as_deref().unwrap_or_default()
    }

    /// Output names and values, in reporting order.
    pub fn outputs(&self) -> [(&'static str, &str); 4] {
        [
            ("id", self.id.as_str()),
            ("url", self.url.as_str()),
            ("state", self.state.as_str()),
            ("alias_error", self.alias_error()),
        ]
    }
}

/// Polls the status endpoint of a single deployment.
pub struct DeploymentStatusPoller<'a, H: ?Sized> {
    http: &'a H,
    endpoints: &'a Endpoints,
    token: &'a AccessToken,
    delay: Duration,
}

impl<'a, H: HttpGet + ?Sized> DeploymentStatusPoller<'a, H> {
    pub fn new(
        http: &'a H,
        endpoints: &'a Endpoints,
        token: &'a AccessToken,
        delay: Duration,
    ) -> Self {
        Self {
            http,
            endpoints,
            token,
            delay,
        }
    }

    /// Wait until `id` is `READY`, or `CANCELED` when `canceled_as_ready`.
    ///
    /// # Errors
    ///
    /// - `WaitError::Access` on a forbidden response, without retrying.
    /// - `WaitError::Errored` as soon as the deployment reports `ERROR`.
    /// - `WaitError::NotReady` once `budget` runs out.
    pub async fn poll(
        &self,
        id: &DeploymentId,
        budget: &TimeBudget,
        canceled_as_ready: bool,
        reporter: &mut dyn Reporter,
    ) -> Result<PollResult, WaitError> {
        let url = self.endpoints.deployment(id);

        info!(%id, "monitoring deployment state");

        while budget.remaining() {
            debug!(%url, "checking deployment state");
            let request = GetRequest::new(url.clone()).bearer(self.token);

            match fetch::<DeploymentDetails, H>(self.http, &request).await {
                RetryOutcome::FatalFailure(denied) => return Err(denied.into()),
                RetryOutcome::TransientFailure(warning) => {
                    warn!("failed to get deployment status: {warning}");
                    reporter.transient_failure(&warning);
                }
                RetryOutcome::Success(details) => {
                    debug!(state = %details.status, "deployment state");
                    reporter.state_observed(id, &details.status);

                    if details.status.is_error() {
                        return Err(WaitError::Errored { id: id.clone() });
                    }

                    if details.status.is_ready(canceled_as_ready) {
                        info!(state = %details.status, "deployment is ready");
                        let alias_error = details.alias_error_message();
                        return Ok(PollResult {
                            id: id.clone(),
                            url: details.url.unwrap_or_default(),
                            state: details.status,
                            alias_error,
                        });
                    }
                }
            }

            tokio::time::sleep(self.delay).await;
        }

        Err(WaitError::NotReady {
            timeout: budget.total(),
        })
    }
}
