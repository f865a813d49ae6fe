//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the 24SevenOffice client
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TwentyFourError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// A remote operation answered with a non-success status code.
    #[error("{operation} returned status {status}: {message}")]
    RemoteStatus {
        operation: String,
        status: u16,
        message: String,
    },

    /// A successful response whose envelope could not be interpreted.
    #[error("SOAP error: {0}")]
    Soap(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Unsupported attachment location: {0}")]
    UnsupportedLocation(String),

    #[error("Too many results: {0}")]
    TooManyResults(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, TwentyFourError>;
