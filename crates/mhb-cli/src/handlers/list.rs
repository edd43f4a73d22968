//! List command handler.

use crate::bootstrap::{CliContext, RegistryOrigin};
use crate::error::CliError;
use crate::presentation::render_table;

/// Print every command in the active registry.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let registry = ctx.registry();

    if registry.is_empty() {
        println!("No commands registered.");
        return Ok(());
    }

    match ctx.origin() {
        RegistryOrigin::Builtin => println!("{} built-in command(s):\n", registry.len()),
        RegistryOrigin::Config(location) => println!(
            "{} command(s) from {}:\n",
            registry.len(),
            location.path.display()
        ),
    }
    print!("{}", render_table(registry));
    Ok(())
}
