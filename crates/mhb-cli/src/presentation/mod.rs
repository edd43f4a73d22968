//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no registry logic.

pub mod command_display;
pub mod tables;

// Re-export commonly used items
pub use command_display::{render_descriptor, render_table};
pub use tables::{separator, truncate_string};
