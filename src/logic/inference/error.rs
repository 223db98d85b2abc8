//! Inference error taxonomy
//!
//! Both kinds are fully recovered inside the analysis engine; neither
//! ever reaches the caller of `analyze`.

use thiserror::Error;

/// Transport / service layer failures from the hosted model endpoint
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference endpoint rejected the credential (HTTP {0})")]
    Unauthorized(u16),

    #[error("inference request timed out")]
    Timeout,

    #[error("inference endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("unexpected response envelope: {0}")]
    MalformedEnvelope(String),
}

/// Validation layer failures while structuring model output
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no JSON object found in model output")]
    NoStructuredPayload,

    #[error("model output JSON failed to parse: {0}")]
    MalformedJson(String),
}
