//! Client error types

use shared::SharedError;
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    #[error("Server returned {status} for {endpoint}: {message}")]
    Status {
        status: u16,
        endpoint: String,
        message: String,
    },

    #[error("Response decoding failed: {message}")]
    Decode { message: String },

    #[error("Unknown filter dimension: {dimension}")]
    UnknownDimension { dimension: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::Decode {
                message: error.to_string(),
            }
        } else {
            ClientError::Http {
                message: error.to_string(),
            }
        }
    }
}
