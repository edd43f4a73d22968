//! Command handlers that delegate to `mhb-core`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Take the composed `CliContext` or a resolved path
//!   2. Call core functions
//!   3. Format output for the terminal
//!
//! Handlers should NOT validate descriptors themselves; the registry
//! builder is the single place that happens.

pub mod check;
pub mod export;
pub mod list;
pub mod show;
pub mod where_config;
