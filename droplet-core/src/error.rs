//! Error types for droplet operations

use thiserror::Error;

/// Core error type for droplet operations
#[derive(Error, Debug)]
pub enum DropletError {
    /// Configuration-related errors (missing or empty credentials)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream API failures while talking to the provider
    #[error("Upstream API error: {0}")]
    Upstream(String),

    /// The listing succeeded but the account has no droplets
    #[error("No droplets found for this account")]
    EmptyResult,

    /// Pagination metadata could not be interpreted
    #[error("Pagination error: {0}")]
    Pagination(String),

    /// Parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for droplet operations
pub type Result<T> = std::result::Result<T, DropletError>;

impl From<serde_json::Error> for DropletError {
    fn from(err: serde_json::Error) -> Self {
        DropletError::Serialization(err.to_string())
    }
}
