use std::time::Duration;
use thiserror::Error;

/// Application-wide error type used at the boundary and during start-up.
///
/// The pipeline itself never returns one of these: detection and
/// classification are total, and generation failures are absorbed by the
/// fallback chain.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before it reaches the pipeline (e.g. an empty message).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors (e.g. an unparsable environment variable).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generation backend failure surfaced outside the orchestrator.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

/// Failure of a single generation call.
///
/// Every variant is handled the same way by the orchestrator (fallback reply);
/// the variants only exist so the cause can be logged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackendError {
    /// No credential configured, so no backend exists.
    #[error("no generation credential configured")]
    NoCredential,

    /// Connection, TLS or body-read failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The response decoded but carried no text.
    #[error("response contained no text")]
    EmptyContent,

    /// The call did not complete within the configured bound.
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Malformed(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}
