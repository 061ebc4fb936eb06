// ABOUTME: Run configuration assembled from flags, environment, and a settings file.
// ABOUTME: Precedence is flag/env over file over built-in defaults.

mod file;

pub use file::{CONFIG_FILENAME, CONFIG_FILENAME_ALT, CONFIG_FILENAME_DIR, FileConfig};

use std::time::Duration;

use crate::api::{DEFAULT_API_URL, Endpoints};
use crate::error::{Error, Result};
use crate::types::{AccessToken, CommitSha, ProjectId, TeamId};
use crate::wait::{Target, WaitSettings};

/// Values supplied on the command line or through environment variables.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub token: Option<String>,
    pub project_id: Option<String>,
    pub team_id: Option<String>,
    pub sha: Option<String>,
    pub timeout_secs: Option<u64>,
    pub delay_secs: Option<u64>,
    pub initial_delay_secs: Option<u64>,
    pub canceled_as_ready: Option<bool>,
    pub api_url: Option<String>,
}

/// Fully resolved and validated configuration for one run.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    pub token: AccessToken,
    pub target: Target,
    pub settings: WaitSettings,
    pub endpoints: Endpoints,
}

impl WaitConfig {
    pub fn resolve(inputs: Inputs, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = WaitSettings::default();

        let token = inputs
            .token
            .map(AccessToken::new)
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingInput("token"))?;

        let project = inputs
            .project_id
            .or(file.project_id)
            .as_deref()
            .and_then(ProjectId::parse)
            .ok_or(Error::MissingInput("project-id"))?;
        let team = inputs
            .team_id
            .or(file.team_id)
            .as_deref()
            .and_then(TeamId::parse)
            .ok_or(Error::MissingInput("team-id"))?;
        let sha = inputs.sha.ok_or(Error::MissingInput("sha"))?;
        let sha = CommitSha::new(sha.trim())?;

        let settings = WaitSettings {
            timeout: seconds(inputs.timeout_secs)
                .or(file.timeout)
                .unwrap_or(defaults.timeout),
            delay: seconds(inputs.delay_secs)
                .or(file.delay)
                .unwrap_or(defaults.delay),
            initial_delay: seconds(inputs.initial_delay_secs)
                .or(file.initial_delay)
                .unwrap_or(defaults.initial_delay),
            canceled_as_ready: inputs
                .canceled_as_ready
                .or(file.canceled_as_ready)
                .unwrap_or(defaults.canceled_as_ready),
        };

        let api_url = inputs
            .api_url
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let endpoints = Endpoints::new(&api_url)?;

        Ok(Self {
            token,
            target: Target {
                project,
                team,
                sha,
            },
            settings,
            endpoints,
        })
    }
}

fn seconds(value: Option<u64>) -> Option<Duration> {
    value.map(Duration::from_secs)
}
