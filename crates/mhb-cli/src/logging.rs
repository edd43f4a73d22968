//! Tracing setup for the `mhb` binary.

use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr so stdout stays clean for exported JSON.
///
/// Log level is controlled by `RUST_LOG` (default: warn); `--verbose`
/// forces debug.
pub fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}
