//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Hiscores error: {0}")]
    Hiscores(#[from] osrs_hiscores::HiscoresError),

    #[error("Items error: {0}")]
    Items(#[from] osrs_items::ItemsError),

    #[error("Transport error: {0}")]
    Transport(#[from] osrs_core::TransportError),
}

pub type AppResult<T> = Result<T, AppError>;
