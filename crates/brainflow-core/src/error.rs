//! Core error types for brainflow-core.
//!
//! Extraction has no failure mode. Classification fails only on empty or
//! too-short input. Everything else here belongs to the storage and
//! configuration layers around the two pure entry points.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for brainflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Inbox / data directory errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Classification input was rejected
    #[error("{0}")]
    Classification(#[from] ClassificationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation failures reported by the energy classifier.
///
/// The messages are shown directly to the end user as a prompt to add
/// more text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationError {
    /// Input was empty after trimming
    #[error("Please provide a task description")]
    Empty,

    /// Input was shorter than the minimum length after trimming
    #[error("Task description is too short (minimum {min} characters)")]
    TooShort { min: usize },
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

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Could not resolve or create the data directory
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Inbox file exists but is not valid JSON
    #[error("Inbox at {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// No item matches the given id or prefix
    #[error("No inbox item matches '{0}'")]
    ItemNotFound(String),

    /// More than one item matches the given id prefix
    #[error("Id prefix '{prefix}' is ambiguous ({count} matches)")]
    AmbiguousId { prefix: String, count: usize },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_errors_render_user_guidance() {
        assert_eq!(
            ClassificationError::Empty.to_string(),
            "Please provide a task description"
        );
        assert_eq!(
            ClassificationError::TooShort { min: 3 }.to_string(),
            "Task description is too short (minimum 3 characters)"
        );
    }

    #[test]
    fn core_error_wraps_storage_error() {
        let err: CoreError = StorageError::ItemNotFound("abc".into()).into();
        assert_eq!(err.to_string(), "Storage error: No inbox item matches 'abc'");
    }
}
