// ABOUTME: Single GET with three-way outcome classification.
// ABOUTME: Separates retryable failures from the access failure that ends the run.

use serde::de::DeserializeOwned;

use crate::api::{ApiError, GetRequest, HttpGet};
use crate::diagnostics::Warning;

/// Result of one request attempt.
///
/// The caller sleeps and retries on `TransientFailure`; `FatalFailure` must
/// end the run without another attempt.
#[derive(Debug)]
pub enum RetryOutcome<T> {
    Success(T),
    TransientFailure(Warning),
    FatalFailure(AccessDenied),
}

/// A `forbidden` error object returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    pub message: String,
    pub invalid_token: bool,
}

/// Issue one GET and classify the outcome.
pub async fn fetch<T, H>(http: &H, request: &GetRequest) -> RetryOutcome<T>
where
    T: DeserializeOwned,
    H: HttpGet + ?Sized,
{
    let response = match http.get(request).await {
        Ok(response) => response,
        Err(e) => return RetryOutcome::TransientFailure(Warning::transport(e.to_string())),
    };

    let body: Option<serde_json::Value> = serde_json::from_str(&response.body).ok();

    // Error objects are inspected before the status code: a forbidden answer
    // usually arrives as a 403.
    if let Some(error) = body.as_ref().and_then(ApiError::from_body) {
        if error.is_forbidden() {
            return RetryOutcome::FatalFailure(AccessDenied {
                message: error.message.unwrap_or_else(|| "forbidden".to_string()),
                invalid_token: error.invalid_token,
            });
        }
        return RetryOutcome::TransientFailure(Warning::api_error(
            error.code.as_deref(),
            error.message.as_deref(),
        ));
    }

    if !response.is_success() {
        return RetryOutcome::TransientFailure(Warning::http_status(response.status));
    }

    let Some(body) = body else {
        return RetryOutcome::TransientFailure(Warning::malformed_response("body is not JSON"));
    };

    match serde_json::from_value(body) {
        Ok(payload) => RetryOutcome::Success(payload),
        Err(e) => RetryOutcome::TransientFailure(Warning::malformed_response(e.to_string())),
    }
}
