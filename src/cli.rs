// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Every input can also come from an environment variable.

use clap::Parser;
use std::path::PathBuf;

use vercel_wait::config::Inputs;
use vercel_wait::output::OutputMode;

#[derive(Parser)]
#[command(name = "vercel-wait")]
#[command(about = "Wait for the Vercel deployment of a commit to become ready")]
#[command(version)]
pub struct Cli {
    /// API access token
    #[arg(long, env = "VERCEL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Project the deployment belongs to
    #[arg(long, env = "VERCEL_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Team that owns the project
    #[arg(long, env = "VERCEL_TEAM_ID")]
    pub team_id: Option<String>,

    /// Commit SHA recorded on the deployment
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Total time allowed for finding and polling, in seconds [default: 600]
    #[arg(long, env = "VERCEL_WAIT_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Pause between attempts, in seconds [default: 10]
    #[arg(long, env = "VERCEL_WAIT_DELAY", value_name = "SECONDS")]
    pub delay: Option<u64>,

    /// Pause before the first request, in seconds [default: 5]
    #[arg(long, env = "VERCEL_WAIT_INITIAL_DELAY", value_name = "SECONDS")]
    pub initial_delay: Option<u64>,

    /// Treat a canceled deployment as ready [default: true]
    #[arg(
        long,
        env = "VERCEL_WAIT_CANCELED_AS_READY",
        value_name = "BOOL",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub canceled_as_ready: Option<bool>,

    /// Base URL of the REST API
    #[arg(long, env = "VERCEL_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Settings file (defaults to vercel-wait.yml in the working directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Normal)]
    pub output: OutputMode,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn inputs(&self) -> Inputs {
        Inputs {
            token: self.token.clone(),
            project_id: self.project_id.clone(),
            team_id: self.team_id.clone(),
            sha: self.sha.clone(),
            timeout_secs: self.timeout,
            delay_secs: self.delay,
            initial_delay_secs: self.initial_delay,
            canceled_as_ready: self.canceled_as_ready,
            api_url: self.api_url.clone(),
        }
    }
}
