//! Error types for mailbox API operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`crate::Client`] operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure: connection, TLS, timeout, or an invalid
    /// request before any response arrived.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status. Carries the status
    /// code and a truncated copy of the response body.
    #[error("api error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    /// The response body was not the JSON shape this client expects.
    #[error("invalid response payload: {0}")]
    Json(#[from] serde_json::Error),

    /// No bearer token was supplied via `--token` or `API_TOKEN`.
    #[error("API token required: pass --token or set API_TOKEN")]
    MissingToken,
}
