//! HTTP client for the lead collection endpoints.
//!
//! One POST per invocation, JSON body, no automatic retry — retrying is
//! a user action (resubmitting the form). Every failure path resolves to
//! an `IntakeError` value; nothing escapes this boundary as a panic.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default intake API base (local backend during development)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Default transport timeout; the only client-side time limit
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Named collection endpoints consumed by the forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Contact-message collection (contact, trip-planning, experience shortcut)
    Contact,
    /// Booking/consultation-request collection
    Booking,
    /// Newsletter-subscription collection
    Newsletter,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Contact => "/api/contact",
            Self::Booking => "/api/booking",
            Self::Newsletter => "/api/newsletter",
        }
    }
}

/// Failure classification for one submission attempt
#[derive(Debug, Clone, Error)]
pub enum IntakeError {
    /// The request never reached the endpoint (connectivity, timeout)
    #[error("network failure: {0}")]
    Network(String),
    /// The endpoint was reachable and returned a non-success status
    #[error("rejected by server (HTTP {status})")]
    Rejected { status: u16, message: Option<String> },
}

impl IntakeError {
    /// Server-provided human-readable message, when one was sent
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Network(_) => None,
        }
    }
}

/// Ok carries the endpoint's optional confirmation message
pub type SubmitResult = Result<Option<String>, IntakeError>;

/// Optional JSON body returned by the endpoints on both success and
/// rejection: `{"message": "..."}`
#[derive(Debug, Deserialize)]
struct AckBody {
    message: Option<String>,
}

/// Extract the optional human-readable message from a response body
fn parse_message(body: &str) -> Option<String> {
    serde_json::from_str::<AckBody>(body)
        .ok()
        .and_then(|ack| ack.message)
}

/// Classify a reachable endpoint's response into the submit result
fn classify_response(status: u16, body: &str) -> SubmitResult {
    let message = parse_message(body);
    if (200..300).contains(&status) {
        Ok(message)
    } else {
        Err(IntakeError::Rejected { status, message })
    }
}

/// Client for the intake endpoints
pub struct IntakeClient {
    http: reqwest::Client,
    base_url: String,
}

impl IntakeClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Issue exactly one POST with a JSON lead body and classify the
    /// outcome. Transport errors (including timeouts) become `Network`;
    /// a reachable endpoint is classified by status code.
    pub(crate) async fn post_lead<T: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        payload: &T,
    ) -> SubmitResult {
        let url = format!("{}{}", self.base_url, endpoint.path());
        tracing::debug!(%url, "submitting lead");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| IntakeError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        // A body that cannot be read after the status arrived still
        // classifies by status; the message just falls back to None.
        let body = response.text().await.unwrap_or_default();
        classify_response(status, &body)
    }
}
