// ABOUTME: Validated source-control commit identifier.
// ABOUTME: Matching against deployment metadata is exact, so input is never normalized.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommitShaError {
    #[error("commit SHA cannot be empty")]
    Empty,

    #[error("commit SHA cannot contain whitespace")]
    ContainsWhitespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitSha(String);

impl CommitSha {
    pub fn new(value: &str) -> Result<Self, CommitShaError> {
        if value.is_empty() {
            return Err(CommitShaError::Empty);
        }

        if value.chars().any(char::is_whitespace) {
            return Err(CommitShaError::ContainsWhitespace);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact comparison with a SHA recorded on a deployment.
    pub fn matches(&self, recorded: &str) -> bool {
        self.0 == recorded
    }
}

impl fmt::Display for CommitSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
