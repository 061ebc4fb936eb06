// ABOUTME: Entry point for the vercel-wait CLI application.
// ABOUTME: Resolves configuration, runs the wait, and reports the outcome.

mod cli;

use clap::Parser;
use cli::Cli;
use std::env;
use tracing_subscriber::EnvFilter;
use vercel_wait::api::ReqwestTransport;
use vercel_wait::config::{FileConfig, WaitConfig};
use vercel_wait::error::{Error, Result};
use vercel_wait::github;
use vercel_wait::output::Output;
use vercel_wait::wait::Waiter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let mut output = Output::new(cli.output);

    if let Err(e) = run(cli, &mut output).await {
        match &e {
            Error::Wait(wait_error) => output.failure(wait_error),
            other => output.error(&other.to_string()),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &mut Output) -> Result<()> {
    let file = match &cli.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => {
            let cwd = env::current_dir()?;
            FileConfig::discover(&cwd)?.map(|(path, config)| {
                tracing::debug!(path = %path.display(), "loaded settings file");
                config
            })
        }
    };

    let config = WaitConfig::resolve(cli.inputs(), file)?;
    let transport = ReqwestTransport::new().map_err(|e| Error::HttpClient(e.to_string()))?;

    output.start_timer();
    output.progress(&format!(
        "Looking for deployment with commit SHA: {}",
        config.target.sha
    ));

    let waiter = Waiter::new(&transport, &config.endpoints, &config.token, config.settings);
    let result = waiter.run(&config.target, output).await?;

    // Outputs first: a failed write must not follow a success line.
    if let Some(path) = github::output_path() {
        github::write_outputs(&path, &result)?;
    }

    output.success(&result);

    Ok(())
}
