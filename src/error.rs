//! Error types for the repodump CLI

use thiserror::Error;

/// Result type alias for repodump operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Gh(#[from] GhError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors from the GitHub CLI boundary
#[derive(Debug, Error)]
pub enum GhError {
    #[error("Failed to run `{program}`: {source}. Is the GitHub CLI installed?")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("GitHub CLI is not working correctly: {0}")]
    Unavailable(String),

    #[error("Failed to decode repository list for {org}: {source}")]
    ListingDecode {
        org: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
