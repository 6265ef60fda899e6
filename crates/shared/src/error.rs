//! Shared error types including RFC7807 Problem Details.

use serde::{Deserialize, Serialize};

/// RFC7807 Problem Details (application/problem+json)
///
/// Backends that report failures this way get a readable message in the
/// client logs instead of the raw body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type", default)]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// HTTP status code.
    #[serde(default)]
    pub status: u16,
    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Attempt to parse an RFC7807 (or RFC7807-ish) JSON body into a user-facing message.
/// Prefers `detail`, falls back to `title`.
pub fn try_problem_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ProblemDetails>(body).ok()?;
    if let Some(detail) = parsed.detail {
        if !detail.trim().is_empty() {
            return Some(detail);
        }
    }
    if !parsed.title.trim().is_empty() {
        return Some(parsed.title);
    }
    None
}

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Any non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// The body was not the JSON we expected.
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// The request body could not be serialized.
    #[error("Encoding error: {0}")]
    Encode(String),
}

impl ApiError {
    /// Short description for logs, using problem details when the body has them.
    pub fn summary(&self) -> String {
        match self {
            ApiError::Http { status, body } => match try_problem_detail(body) {
                Some(detail) => format!("HTTP {status}: {detail}"),
                None => self.to_string(),
            },
            other => other.to_string(),
        }
    }
}
