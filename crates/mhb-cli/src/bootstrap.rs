//! CLI bootstrap - the composition root.
//!
//! Decides which registry the registry-backed commands operate on: the
//! built-in apps, or a config document named by `--config` / `MHB_CONFIG`.

use std::env;
use std::path::PathBuf;

use mhb_core::{CONFIG_ENV_VAR, CommandRegistry, ConfigLocation, ConfigSource, load_config};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Config document passed on the command line, if any.
    pub config_path: Option<PathBuf>,
    /// Value of `MHB_CONFIG` captured at startup.
    pub env_config: Option<String>,
}

impl CliConfig {
    /// Pair the command-line path with the current `MHB_CONFIG` value.
    pub fn from_env(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            env_config: env::var(CONFIG_ENV_VAR).ok(),
        }
    }
}

/// Where the active registry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryOrigin {
    /// The apps compiled into this binary.
    Builtin,
    /// A config document on disk.
    Config(ConfigLocation),
}

/// Composed context handed to command handlers.
#[derive(Debug, Clone)]
pub struct CliContext {
    registry: CommandRegistry,
    origin: RegistryOrigin,
}

impl CliContext {
    pub fn new(registry: CommandRegistry, origin: RegistryOrigin) -> Self {
        Self { registry, origin }
    }

    /// The active registry.
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub const fn origin(&self) -> &RegistryOrigin {
        &self.origin
    }
}

/// Bootstrap the CLI context.
///
/// An explicit `--config` or a non-blank captured `MHB_CONFIG` value
/// selects a config document; otherwise the built-in registry is used. Either way the
/// registry is fully validated before any handler runs.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let location = match &config.config_path {
        Some(path) => Some(ConfigLocation {
            path: path.clone(),
            source: ConfigSource::Explicit,
        }),
        None => ConfigLocation::from_env_value(config.env_config.as_deref()),
    };

    let Some(location) = location else {
        tracing::debug!("using built-in registry");
        return Ok(CliContext::new(mhb_core::registry()?, RegistryOrigin::Builtin));
    };

    tracing::debug!(
        path = %location.path.display(),
        source = ?location.source,
        "loading config document"
    );
    let registry = load_config(&location.path)?;
    Ok(CliContext::new(registry, RegistryOrigin::Config(location)))
}
