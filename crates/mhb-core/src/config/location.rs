//! Config file location resolution.
//!
//! The launcher ships `config.json` next to its executable; during
//! development it is read from `test/config.json` instead.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// File name looked up beside the executable.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides the config location.
pub const CONFIG_ENV_VAR: &str = "MHB_CONFIG";

/// Used when no executable-adjacent config exists.
pub const FALLBACK_CONFIG_PATH: &str = "test/config.json";

/// How the config path was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The caller passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from `MHB_CONFIG`.
    EnvVar,
    /// `config.json` beside the running executable.
    Executable,
    /// `test/config.json` relative to the working directory.
    Fallback,
}

/// Resolution result for the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub source: ConfigSource,
}

impl ConfigLocation {
    /// Location named by a `MHB_CONFIG` value, if it is not blank.
    ///
    /// The value is used as given; surrounding whitespace is part of the path.
    pub fn from_env_value(value: Option<&str>) -> Option<Self> {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| Self {
                path: PathBuf::from(v),
                source: ConfigSource::EnvVar,
            })
    }
}

impl fmt::Display for ConfigLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "config_path = {}", self.path.display())?;
        write!(f, "config_source = {:?}", self.source)
    }
}

/// Resolve the config file location.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `MHB_CONFIG` environment variable
/// 3. `config.json` beside the current executable, if it exists
/// 4. `test/config.json`
pub fn resolve_config_path(explicit: Option<&Path>) -> ConfigLocation {
    let env_value = env::var(CONFIG_ENV_VAR).ok();
    let exe = match env::current_exe() {
        Ok(exe) => Some(exe),
        Err(e) => {
            tracing::warn!("Cannot determine executable location: {e}");
            None
        }
    };
    resolve_with(explicit, env_value.as_deref(), exe.as_deref())
}

fn resolve_with(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    exe: Option<&Path>,
) -> ConfigLocation {
    if let Some(path) = explicit {
        return ConfigLocation {
            path: path.to_path_buf(),
            source: ConfigSource::Explicit,
        };
    }

    if let Some(location) = ConfigLocation::from_env_value(env_value) {
        return location;
    }

    if let Some(candidate) = exe
        .and_then(Path::parent)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|candidate| candidate.is_file())
    {
        return ConfigLocation {
            path: candidate,
            source: ConfigSource::Executable,
        };
    }

    tracing::debug!("No config beside executable, using {FALLBACK_CONFIG_PATH}");
    ConfigLocation {
        path: PathBuf::from(FALLBACK_CONFIG_PATH),
        source: ConfigSource::Fallback,
    }
}
