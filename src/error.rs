//! Error types for the Tarkov search CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tarkov-search operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Web server error: {0}")]
    Server(String),
}

impl Error {
    /// The validation error raised for an empty or blank query
    pub fn missing_query() -> Self {
        Error::Validation("Query is required".to_string())
    }
}

/// Browser launch errors
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Failed to launch browser for {url}: {source}")]
    Spawn {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Browser command exited with {status} while opening {url}")]
    ExitStatus { url: String, status: String },

    #[error("Invalid browser command: {0}")]
    InvalidCommand(String),
}

/// Cache file errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Could not determine cache directory")]
    NoCacheDir,

    #[error("Failed to read cache file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse cache file: {0}")]
    Parse(String),

    #[error("Failed to write cache file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Parse(err.to_string())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

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
