//! Error types for the network seams.

use thiserror::Error;

pub type HttpResult<T> = std::result::Result<T, HttpError>;

/// Transport-level failure of the underlying client.
///
/// These propagate to the original caller unchanged; the interceptors never
/// convert or swallow them.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
