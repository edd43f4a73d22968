//! Config document error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::RegistryError;

/// Errors that can occur while reading, writing or validating `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The config file could not be written.
    #[error("Failed to write config {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// The document is not valid JSON or lacks the `commands` list.
    #[error("Invalid config document: {0}")]
    Parse(String),

    /// The registry could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// The document parsed but its commands do not form a valid registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
