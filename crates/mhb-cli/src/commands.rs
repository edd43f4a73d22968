//! Subcommands of the `mhb` binary.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every registered command
    List,

    /// Show a single command by name
    Show {
        /// Command name (e.g., "task-switch-alarm")
        name: String,
    },

    /// Write the active registry as a launcher config document
    Export {
        /// Destination file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print single-line JSON instead of pretty-printed output (stdout only)
        #[arg(long)]
        compact: bool,
    },

    /// Validate a launcher config document
    Check {
        /// Config document to validate; resolved like the launcher when omitted
        path: Option<PathBuf>,
    },

    /// Show where the config document is resolved from
    Where,
}
