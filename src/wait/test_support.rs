// ABOUTME: Scripted HTTP transport and recording reporter for state machine tests.
// ABOUTME: Responses are served in order; the last one repeats once the script runs out.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::{LocatedDeployment, Reporter};
use crate::api::{DeploymentState, GetRequest, HttpGet, HttpResponse, TransportError};
use crate::diagnostics::Warning;
use crate::types::DeploymentId;

type Scripted = Result<HttpResponse, TransportError>;

pub struct ScriptedTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<GetRequest>>,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn json(status: u16, body: &str) -> Scripted {
        Ok(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    pub fn requests(&self) -> Vec<GetRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn replay(scripted: &Scripted) -> Scripted {
    match scripted {
        Ok(response) => Ok(response.clone()),
        Err(TransportError::Request(msg)) => Err(TransportError::Request(msg.clone())),
        Err(TransportError::Body(msg)) => Err(TransportError::Body(msg.clone())),
    }
}

#[async_trait]
impl HttpGet for ScriptedTransport {
    async fn get(&self, request: &GetRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            replay(script.front().expect("script must not be empty"))
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub found: Vec<DeploymentId>,
    pub states: Vec<DeploymentState>,
    pub warnings: Vec<Warning>,
}

impl Reporter for RecordingReporter {
    fn deployment_found(&mut self, deployment: &LocatedDeployment) {
        self.found.push(deployment.id.clone());
    }

    fn state_observed(&mut self, _id: &DeploymentId, state: &DeploymentState) {
        self.states.push(state.clone());
    }

    fn transient_failure(&mut self, warning: &Warning) {
        self.warnings.push(warning.clone());
    }
}

/// Listing page with the given `(uid, sha, state)` records.
pub fn page(records: &[(&str, &str, &str)], next: Option<u64>) -> String {
    let deployments: Vec<serde_json::Value> = records
        .iter()
        .map(|(uid, sha, state)| {
            serde_json::json!({
                "uid": uid,
                "state": state,
                "url": format!("{uid}.vercel.app"),
                "meta": { "githubCommitSha": sha },
            })
        })
        .collect();
    serde_json::json!({
        "deployments": deployments,
        "pagination": { "next": next },
    })
    .to_string()
}

pub fn status(state: &str, url: &str) -> String {
    serde_json::json!({ "status": state, "url": url }).to_string()
}

pub const FORBIDDEN: &str =
    r#"{"error":{"code":"forbidden","message":"bad token","invalidToken":true}}"#;
