//! The `config.json` document read by the launcher.
//!
//! Shape: `{ "commands": [ { "name", "description", "commandToExecute" } ] }`.
//! Nested `subCommands` are rejected; the registry is flat.
//! Loading always goes back through [`RegistryBuilder`], so a file on disk
//! is held to the same rules as the built-in registry.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::domain::{CommandEntry, CommandRegistry, RegistryBuilder, RegistryError};

/// Top-level config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub commands: Vec<CommandEntry>,
}

impl ConfigDocument {
    pub fn from_registry(registry: &CommandRegistry) -> Self {
        Self {
            commands: registry.iter().cloned().map(CommandEntry::from).collect(),
        }
    }

    /// Validate the entries and assemble them into a registry.
    pub fn into_registry(self) -> Result<CommandRegistry, RegistryError> {
        RegistryBuilder::new().extend(self.commands).build()
    }
}

/// Serialize a registry as a config document.
pub fn to_json(registry: &CommandRegistry, pretty: bool) -> Result<String, ConfigError> {
    let document = ConfigDocument::from_registry(registry);
    let result = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    };
    result.map_err(|e| ConfigError::Serialize(e.to_string()))
}

/// Parse and validate a config document.
pub fn parse_config(json: &str) -> Result<CommandRegistry, ConfigError> {
    let document: ConfigDocument =
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
    Ok(document.into_registry()?)
}

/// Read, parse and validate the config document at `path`.
pub fn load_config(path: &Path) -> Result<CommandRegistry, ConfigError> {
    let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let registry = parse_config(&json)?;
    tracing::debug!(
        path = %path.display(),
        count = registry.len(),
        "loaded config document"
    );
    Ok(registry)
}

/// Write `registry` to `path` as pretty-printed JSON, creating parent
/// directories as needed.
pub fn write_config(registry: &CommandRegistry, path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut json = to_json(registry, true)?;
    json.push('\n');
    fs::write(path, json).map_err(write_err)?;

    tracing::info!(
        path = %path.display(),
        count = registry.len(),
        "wrote config document"
    );
    Ok(())
}
