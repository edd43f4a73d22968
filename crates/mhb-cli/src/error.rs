//! CLI-specific error types and mappings.
//!
//! This module provides the CLI error type and the mapping from core
//! errors to exit codes and user-facing messages.

use mhb_core::{ConfigError, RegistryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (unknown command name, etc.).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Config document could not be parsed or serialized.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Descriptors do not form a valid registry.
    #[error("Registry error: {0}")]
    Registry(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Registry(_) => 65, // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Read { .. } | ConfigError::Write { .. } => Self::Io(err.to_string()),
            ConfigError::Parse(msg) | ConfigError::Serialize(msg) => Self::Config(msg),
            ConfigError::Registry(registry_err) => registry_err.into(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
