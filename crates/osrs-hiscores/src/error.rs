//! Hiscores error types.

use osrs_core::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HiscoresError {
    #[error("Failed to fetch hiscores for '{username}': {source}")]
    Fetch {
        username: String,
        #[source]
        source: TransportError,
    },

    #[error("Unknown {bucket} key '{key}'")]
    NotFound { bucket: &'static str, key: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

pub type HiscoresResult<T> = Result<T, HiscoresError>;
