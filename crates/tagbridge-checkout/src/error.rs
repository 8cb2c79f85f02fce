//! Error types for checkout normalization.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizeError>;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Event emission error: {0}")]
    Emit(#[from] tagbridge_core::BridgeError),
}
