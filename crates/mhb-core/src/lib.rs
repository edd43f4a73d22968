//! Core domain types for the MHB utilities command registry.
//!
//! Every terminal app in the collection contributes one
//! [`CommandDescriptor`]; the [`CommandRegistry`] aggregates them in
//! declaration order and rejects duplicate names or malformed descriptors
//! at assembly time.
//!
//! # Structure
//!
//! - `domain` - Descriptor and registry types plus the validating builder
//! - `apps` - The built-in app descriptor sources and the registry accessor
//! - `config` - The `config.json` document consumed by the launcher

#![deny(unused_crate_dependencies)]

pub mod apps;
pub mod config;
pub mod domain;

// Re-export commonly used types for convenience
pub use apps::{BUILTIN_APPS, build_registry, registry};
pub use config::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, ConfigDocument, ConfigError, ConfigLocation, ConfigSource,
    FALLBACK_CONFIG_PATH, load_config, parse_config, resolve_config_path, to_json, write_config,
};
pub use domain::{
    CommandDescriptor, CommandEntry, CommandRegistry, DescriptorError, DescriptorField,
    DescriptorSource, RegistryBuilder, RegistryError,
};
