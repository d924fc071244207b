//! Item catalog error types.

use osrs_core::TransportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemsError {
    #[error("Failed to fetch '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("No {scope} matching '{query}'")]
    NotFound { query: String, scope: &'static str },

    #[error("Missing capability: {0}")]
    MissingCapability(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

pub type ItemsResult<T> = Result<T, ItemsError>;
