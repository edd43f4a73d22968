//! The launcher's `config.json`: document I/O and file location.
//!
//! # Design
//!
//! - Returns `ConfigError` for every failure; nothing here panics
//! - No terminal I/O - adapters decide how to report results

mod document;
mod error;
mod location;

pub use document::{ConfigDocument, load_config, parse_config, to_json, write_config};
pub use error::ConfigError;
pub use location::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, ConfigLocation, ConfigSource, FALLBACK_CONFIG_PATH,
    resolve_config_path,
};
