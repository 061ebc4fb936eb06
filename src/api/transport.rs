// ABOUTME: HTTP transport seam used by the polling core.
// ABOUTME: Provides the HttpGet trait and its reqwest-backed implementation.

use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;

use crate::types::AccessToken;

/// A GET request with the headers the core attaches.
#[derive(Debug, Clone)]
pub struct GetRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl GetRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    pub fn bearer(mut self, token: &AccessToken) -> Self {
        self.headers
            .push(("Authorization".to_string(), token.bearer()));
        self
    }
}

/// Raw response: status code plus the undecoded body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any response at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Capability to issue a single GET.
///
/// The polling core is generic over this trait so the state machines can be
/// driven by scripted responses in tests.
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, request: &GetRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport over a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vercel-wait/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpGet for ReqwestTransport {
    async fn get(&self, request: &GetRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.get(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
