// ABOUTME: Two-phase wait for a deployment: locate it by commit, then poll its state.
// ABOUTME: Both phases share one time budget that starts after the initial delay.

mod budget;
mod error;
mod locate;
mod poll;
mod reporter;
mod request;

#[cfg(test)]
mod test_support;

pub use budget::TimeBudget;
pub use error::{WaitError, WaitErrorKind};
pub use locate::{DeploymentLocator, LocatedDeployment};
pub use poll::{DeploymentStatusPoller, PollResult};
pub use reporter::Reporter;
pub use request::{AccessDenied, RetryOutcome, fetch};

use std::time::Duration;
use tracing::debug;

use crate::api::{Endpoints, HttpGet};
use crate::types::{AccessToken, CommitSha, ProjectId, TeamId};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);
pub const DEFAULT_DELAY: Duration = Duration::from_secs(10);
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(5);

/// Timing and terminal-state policy for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    /// Budget shared by both phases.
    pub timeout: Duration,
    /// Fixed pause between attempts. There is no backoff.
    pub delay: Duration,
    /// Pause before the budget starts.
    pub initial_delay: Duration,
    pub canceled_as_ready: bool,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            delay: DEFAULT_DELAY,
            initial_delay: DEFAULT_INITIAL_DELAY,
            canceled_as_ready: true,
        }
    }
}

/// What to wait for.
#[derive(Debug, Clone)]
pub struct Target {
    pub project: ProjectId,
    pub team: TeamId,
    pub sha: CommitSha,
}

/// Runs both phases against one API.
pub struct Waiter<'a, H: ?Sized> {
    http: &'a H,
    endpoints: &'a Endpoints,
    token: &'a AccessToken,
    settings: WaitSettings,
}

impl<'a, H: HttpGet + ?Sized> Waiter<'a, H> {
    pub fn new(
        http: &'a H,
        endpoints: &'a Endpoints,
        token: &'a AccessToken,
        settings: WaitSettings,
    ) -> Self {
        Self {
            http,
            endpoints,
            token,
            settings,
        }
    }

    /// Wait for the deployment of `target` to become ready.
    ///
    /// # Errors
    ///
    /// Returns the first fatal or timeout condition of either phase.
    pub async fn run(
        &self,
        target: &Target,
        reporter: &mut dyn Reporter,
    ) -> Result<PollResult, WaitError> {
        debug!(
            "waiting for initial delay of {} seconds",
            self.settings.initial_delay.as_secs()
        );
        tokio::time::sleep(self.settings.initial_delay).await;

        let budget = TimeBudget::start(self.settings.timeout);

        let locator =
            DeploymentLocator::new(self.http, self.endpoints, self.token, self.settings.delay);
        let located = locator
            .locate(&target.project, &target.team, &target.sha, &budget, reporter)
            .await?;
        reporter.deployment_found(&located);

        DeploymentStatusPoller::new(self.http, self.endpoints, self.token, self.settings.delay)
            .poll(
                &located.id,
                &budget,
                self.settings.canceled_as_ready,
                reporter,
            )
            .await
    }
}
