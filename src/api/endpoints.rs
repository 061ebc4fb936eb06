// ABOUTME: URL construction for the listing and single-deployment endpoints.
// ABOUTME: Owns the page size and the pagination cursor query parameter.

use reqwest::Url;
use thiserror::Error;

use super::Cursor;
use crate::types::{DeploymentId, ProjectId, TeamId};

pub const DEFAULT_API_URL: &str = "https://api.vercel.com";

/// Fixed page size for the deployments listing.
pub const PAGE_SIZE: u32 = 100;

/// Query parameter carrying the pagination cursor.
pub const CURSOR_PARAM: &str = "until";

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("API URL must use http or https: {0}")]
    UnsupportedScheme(String),
}

/// Endpoint roots derived from the API base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    listing: Url,
    deployment: Url,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self, EndpointError> {
        let base = base.trim_end_matches('/');
        let parse = |path: &str| {
            let raw = format!("{base}{path}");
            Url::parse(&raw).map_err(|e| EndpointError::InvalidUrl {
                url: raw,
                reason: e.to_string(),
            })
        };

        let listing = parse("/v6/deployments")?;
        if !matches!(listing.scheme(), "http" | "https") {
            return Err(EndpointError::UnsupportedScheme(base.to_string()));
        }
        let deployment = parse("/v13/deployments")?;

        Ok(Self {
            listing,
            deployment,
        })
    }

    /// First page of the listing, scoped to one project and team.
    pub fn deployments(&self, project: &ProjectId, team: &TeamId) -> Url {
        let mut url = self.listing.clone();
        url.query_pairs_mut()
            .append_pair("projectId", project.as_str())
            .append_pair("teamId", team.as_str())
            .append_pair("limit", &PAGE_SIZE.to_string());
        url
    }

    pub fn deployment(&self, id: &DeploymentId) -> Url {
        let mut url = self.deployment.clone();
        // http(s) URLs always have path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }
}

/// Point `url` at the page after `cursor`.
///
/// Any cursor already present is replaced, so the result always carries
/// exactly one cursor parameter.
pub fn with_cursor(url: &Url, cursor: &Cursor) -> Url {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != CURSOR_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut next = url.clone();
    next.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(CURSOR_PARAM, cursor.as_str());
    next
}
