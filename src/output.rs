// ABOUTME: Console reporting for a wait run.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

use crate::api::DeploymentState;
use crate::diagnostics::{Diagnostics, Warning};
use crate::types::DeploymentId;
use crate::wait::{LocatedDeployment, PollResult, Reporter, WaitError};

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    #[default]
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
    last_state: Option<DeploymentState>,
    diagnostics: Diagnostics,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
            last_state: None,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Report the ready deployment.
    pub fn success(&self, result: &PollResult) {
        match self.mode {
            OutputMode::Normal => {
                println!("Deployment is ready: {}", result.url());
                if !result.alias_error().is_empty() {
                    println!("Alias error: {}", result.alias_error());
                }
                if let Some(summary) = self.diagnostics.summary() {
                    println!("Recovered from {summary}");
                }
            }
            OutputMode::Quiet => {
                // Print only the essential result
                println!("{}", result.url());
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "success",
                    message: "deployment is ready",
                    kind: None,
                    id: Some(result.id().as_str()),
                    url: Some(result.url()),
                    state: Some(result.state().as_str()),
                    alias_error: Some(result.alias_error()),
                    transient_failures: self.diagnostics.warnings().len(),
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    println!("{json}");
                }
            }
        }
    }

    /// Report a failed run.
    pub fn failure(&self, err: &WaitError) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {err}");
            }
            OutputMode::Json => {
                let message = err.to_string();
                let event = JsonEvent {
                    event: "error",
                    message: &message,
                    kind: Some(err.kind().as_str()),
                    id: err.deployment_id().map(|id| id.as_str()),
                    url: None,
                    state: None,
                    alias_error: None,
                    transient_failures: self.diagnostics.warnings().len(),
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    /// Print an error that happened before waiting started.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    kind: None,
                    id: None,
                    url: None,
                    state: None,
                    alias_error: None,
                    transient_failures: 0,
                    duration_secs: self.duration(),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }
}

impl Reporter for Output {
    fn deployment_found(&mut self, deployment: &LocatedDeployment) {
        match deployment.created {
            Some(created) => self.progress(&format!(
                "Deployment found: {} (created {})",
                deployment.id,
                created.format("%Y-%m-%d %H:%M:%S UTC")
            )),
            None => self.progress(&format!("Deployment found: {}", deployment.id)),
        }
        if self.mode == OutputMode::Json {
            let event = JsonEvent {
                event: "found",
                message: "deployment found",
                kind: None,
                id: Some(deployment.id.as_str()),
                url: deployment.url.as_deref(),
                state: deployment.state.as_ref().map(DeploymentState::as_str),
                alias_error: None,
                transient_failures: self.diagnostics.warnings().len(),
                duration_secs: self.duration(),
            };
            if let Ok(json) = serde_json::to_string(&event) {
                println!("{json}");
            }
        }
    }

    fn state_observed(&mut self, id: &DeploymentId, state: &DeploymentState) {
        if self.last_state.as_ref() != Some(state) {
            self.progress(&format!("Deployment {id} is {state}"));
            self.last_state = Some(state.clone());
        }
    }

    fn transient_failure(&mut self, warning: &Warning) {
        self.diagnostics.record(warning.clone());
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias_error: Option<&'a str>,
    transient_failures: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}
