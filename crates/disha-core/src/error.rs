//! Core error types for disha-core.
//!
//! Catalog queries and the message router are infallible by design; errors
//! only arise at the edges (session storage, configuration, profile
//! validation).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for disha-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session/profile storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Profile validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Session-storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Home/data directory could not be resolved
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Failed to read a storage file
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a storage file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Profile validation errors.
///
/// These are user-facing: the CLI surfaces them verbatim and refuses to
/// persist the session, leaving stored state untouched.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required profile field is empty
    #[error("Required field '{0}' is empty")]
    MissingField(&'static str),

    /// Email does not look like local-part@domain.tld
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// A value could not be parsed into the expected type
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
