//! CLI entry point - the composition root.
//!
//! Parses arguments, initializes logging and dispatches to handlers.
//! Errors are reported on stderr and mapped to sysexits-style exit codes.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use mhb_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, logging};

fn run(cli: Cli) -> Result<(), CliError> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_env(cli.config);

    match command {
        Commands::List => {
            let ctx = bootstrap(&config)?;
            handlers::list::execute(&ctx)?;
        }
        Commands::Show { name } => {
            let ctx = bootstrap(&config)?;
            handlers::show::execute(&ctx, &name)?;
        }
        Commands::Export { output, compact } => {
            let ctx = bootstrap(&config)?;
            handlers::export::execute(&ctx, output.as_deref(), compact)?;
        }
        // Check and Where resolve the document themselves so an invalid
        // file is reported rather than failing bootstrap.
        Commands::Check { path } => {
            let path = path.or(config.config_path);
            handlers::check::execute(path.as_deref())?;
        }
        Commands::Where => {
            handlers::where_config::execute(config.config_path.as_deref());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    logging::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
