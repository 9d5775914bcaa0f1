//! Error types for the backend layer.

use thiserror::Error;

/// Errors that can occur while talking to an OCR or completion backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure (connection, TLS, timeout inside the client).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The backend answered with a non-success status code.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A long-running analysis did not finish within the poll budget.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The backend accepted the request but reported the operation as failed.
    #[error("operation failed: {0}")]
    Operation(String),

    /// The client is missing endpoint or credential settings.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "azure")]
impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            BackendError::Malformed(e.to_string())
        } else {
            BackendError::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        BackendError::Malformed(e.to_string())
    }
}
