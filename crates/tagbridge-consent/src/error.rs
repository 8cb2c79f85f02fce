//! Error types for consent resolution.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsentError>;

#[derive(Error, Debug)]
pub enum ConsentError {
    #[error("Malformed consent cookie: {0}")]
    Cookie(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event emission error: {0}")]
    Emit(#[from] tagbridge_core::BridgeError),
}
