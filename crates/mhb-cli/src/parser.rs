//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the MHB utilities registry.
#[derive(Parser)]
#[command(name = "mhb")]
#[command(about = "MHB Utilities")]
#[command(long_about = "MHB Utilities. Run with no command to print this help.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Read commands from this config document instead of the built-in registry
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
