// ABOUTME: Wire types for the deployments REST API.
// ABOUTME: Covers the paginated listing, single deployment status, and error bodies.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

use super::DeploymentState;
use crate::types::{CommitSha, DeploymentId};

/// One page of the deployments listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentList {
    pub deployments: Vec<ListedDeployment>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl DeploymentList {
    /// First deployment in page order whose recorded commit equals `sha`.
    pub fn find_by_sha(&self, sha: &CommitSha) -> Option<&ListedDeployment> {
        self.deployments
            .iter()
            .find(|d| d.commit_sha().is_some_and(|recorded| sha.matches(recorded)))
    }

    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.pagination.as_ref().and_then(|p| p.next.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedDeployment {
    pub uid: DeploymentId,
    #[serde(default)]
    pub meta: Option<DeploymentMeta>,
    #[serde(default)]
    pub state: Option<DeploymentState>,
    #[serde(default)]
    pub ready_state: Option<DeploymentState>,
    #[serde(default)]
    pub status: Option<DeploymentState>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created: Option<DateTime<Utc>>,
}

impl ListedDeployment {
    pub fn commit_sha(&self) -> Option<&str> {
        self.meta.as_ref()?.github_commit_sha.as_deref()
    }

    /// The listing reports lifecycle under several keys; any of them in
    /// `ERROR` marks the deployment as failed.
    pub fn is_error(&self) -> bool {
        [&self.state, &self.ready_state, &self.status]
            .into_iter()
            .flatten()
            .any(DeploymentState::is_error)
    }

    pub fn lifecycle_state(&self) -> Option<&DeploymentState> {
        self.state
            .as_ref()
            .or(self.ready_state.as_ref())
            .or(self.status.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentMeta {
    #[serde(default, rename = "githubCommitSha")]
    pub github_commit_sha: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next: Option<Cursor>,
}

/// Opaque pagination token. The API sends it as a number, but it is only
/// ever echoed back, so it is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCursor")]
pub struct Cursor(String);

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCursor {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawCursor> for Cursor {
    fn from(raw: RawCursor) -> Self {
        match raw {
            RawCursor::Number(n) => Cursor(n.to_string()),
            RawCursor::Text(s) => Cursor(s),
        }
    }
}

/// Status of a single deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentDetails {
    pub status: DeploymentState,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alias_error: Option<serde_json::Value>,
}

impl DeploymentDetails {
    /// Alias error flattened to text. The API sends either a string or an
    /// object with a `message`.
    pub fn alias_error_message(&self) -> Option<String> {
        match self.alias_error.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(obj) => match obj.get("message") {
                Some(serde_json::Value::String(msg)) => Some(msg.clone()),
                _ => Some(serde_json::Value::Object(obj.clone()).to_string()),
            },
            other => Some(other.to_string()),
        }
    }
}

/// Error object the API may return in place of a payload.
///
/// Fields are read leniently: a forbidden code must be recognised even when
/// the other members are null or of an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub invalid_token: bool,
}

impl ApiError {
    pub const FORBIDDEN: &'static str = "forbidden";

    /// Extract the `error` object from a response body, if present.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        let error = body.get("error")?.as_object()?;
        let text = |key: &str| {
            error
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        };
        Some(Self {
            code: text("code"),
            message: text("message"),
            invalid_token: error
                .get("invalidToken")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false),
        })
    }

    pub fn is_forbidden(&self) -> bool {
        self.code.as_deref() == Some(Self::FORBIDDEN)
    }
}
