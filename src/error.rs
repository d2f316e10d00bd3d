//! Error types for bloburl

use thiserror::Error;

/// Result type alias for bloburl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bloburl operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}
