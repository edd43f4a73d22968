//! `mhb` command-line adapter over `mhb-core`.
//!
//! The binary lists, inspects, exports and validates the command registry
//! that the external launcher consumes. All registry logic lives in core;
//! this crate only parses arguments, wires things together and formats
//! output.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

#[cfg(test)]
mod test_utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, RegistryOrigin, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
