//! Where command handler.
//!
//! Prints the resolved config location in `key = value` format, which is
//! the quickest way to see why the launcher picked up a given file.

use std::path::Path;

use mhb_core::resolve_config_path;

/// Print the resolved config path and how it was chosen.
pub fn execute(explicit: Option<&Path>) {
    let location = resolve_config_path(explicit);
    println!("{location}");
    println!("config_exists = {}", location.path.is_file());
}
