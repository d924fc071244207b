//! Error types for osrs-core.

use thiserror::Error;

/// Failures below the API layer: building the client, sending, status, body.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode(e.to_string())
    }
}

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
