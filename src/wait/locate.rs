// ABOUTME: Phase one: page through the deployments listing until one matches the commit.
// ABOUTME: Wraps around to the first page when the listing runs out of cursors.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::budget::TimeBudget;
use super::error::WaitError;
use super::reporter::Reporter;
use super::request::{RetryOutcome, fetch};
use crate::api::{
    DeploymentList, DeploymentState, Endpoints, GetRequest, HttpGet, ListedDeployment,
    with_cursor,
};
use crate::types::{AccessToken, CommitSha, DeploymentId, ProjectId, TeamId};

/// Deployment matched by commit SHA.
#[derive(Debug, Clone)]
pub struct LocatedDeployment {
    pub id: DeploymentId,
    pub state: Option<DeploymentState>,
    pub url: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl From<&ListedDeployment> for LocatedDeployment {
    fn from(listed: &ListedDeployment) -> Self {
        Self {
            id: listed.uid.clone(),
            state: listed.lifecycle_state().cloned(),
            url: listed.url.clone(),
            created: listed.created,
        }
    }
}

/// Searches the listing of one project for a commit.
pub struct DeploymentLocator<'a, H: ?Sized> {
    http: &'a H,
    endpoints: &'a Endpoints,
    token: &'a AccessToken,
    delay: Duration,
}

impl<'a, H: HttpGet + ?Sized> DeploymentLocator<'a, H> {
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

    /// Find the first deployment whose recorded commit equals `sha`.
    ///
    /// # Errors
    ///
    /// - `WaitError::Access` on a forbidden response, without retrying.
    /// - `WaitError::ErroredOnDiscovery` if the match is already in `ERROR`.
    /// - `WaitError::NotFound` once `budget` runs out.
    pub async fn locate(
        &self,
        project: &ProjectId,
        team: &TeamId,
        sha: &CommitSha,
        budget: &TimeBudget,
        reporter: &mut dyn Reporter,
    ) -> Result<LocatedDeployment, WaitError> {
        let first_page = self.endpoints.deployments(project, team);
        let mut url = first_page.clone();

        info!(%sha, "looking for deployment");

        while budget.remaining() {
            debug!(%url, "requesting deployments");
            let request = GetRequest::new(url.clone()).bearer(self.token);

            match fetch::<DeploymentList, H>(self.http, &request).await {
                RetryOutcome::FatalFailure(denied) => return Err(denied.into()),
                RetryOutcome::TransientFailure(warning) => {
                    warn!("failed to get deployments: {warning}");
                    reporter.transient_failure(&warning);
                }
                RetryOutcome::Success(page) => {
                    if let Some(found) = page.find_by_sha(sha) {
                        if found.is_error() {
                            return Err(WaitError::ErroredOnDiscovery {
                                id: found.uid.clone(),
                            });
                        }
                        info!(id = %found.uid, "deployment found");
                        return Ok(LocatedDeployment::from(found));
                    }

                    // Without a next cursor the listing is exhausted for now.
                    // Start over: the deployment may not have been created yet.
                    url = match page.next_cursor() {
                        Some(cursor) => with_cursor(&url, cursor),
                        None => first_page.clone(),
                    };
                }
            }

            tokio::time::sleep(self.delay).await;
        }

        Err(WaitError::NotFound {
            sha: sha.clone(),
            timeout: budget.total(),
        })
    }
}
