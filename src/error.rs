// ABOUTME: Application-wide error types for vercel-wait.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

use crate::api::EndpointError;
use crate::types::CommitShaError;
use crate::wait::WaitError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid commit SHA: {0}")]
    InvalidSha(#[from] CommitShaError),

    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("failed to write outputs: {0}")]
    Output(String),

    #[error(transparent)]
    Wait(#[from] WaitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
