use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for wayfinder
#[derive(Debug, Error)]
pub enum WayfinderError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Cannot start logging: {0}")]
    Logging(String),

    #[error("Cannot start location lookup: {0}")]
    LookupUnavailable(String),

    #[error("Cannot encode trip request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
