//! Export command handler.
//!
//! Produces the `config.json` document the launcher reads.

use std::path::Path;

use mhb_core::{to_json, write_config};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Write the active registry to `output`, or print it to stdout.
pub fn execute(ctx: &CliContext, output: Option<&Path>, compact: bool) -> Result<(), CliError> {
    match output {
        Some(path) => {
            write_config(ctx.registry(), path)?;
            eprintln!(
                "Wrote {} command(s) to {}",
                ctx.registry().len(),
                path.display()
            );
        }
        None => println!("{}", to_json(ctx.registry(), !compact)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::RegistryOrigin;
    use tempfile::tempdir;

    #[test]
    fn test_export_to_file_is_loadable() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        let ctx = CliContext::new(mhb_core::registry().unwrap(), RegistryOrigin::Builtin);

        execute(&ctx, Some(&path), false).unwrap();

        assert_eq!(&mhb_core::load_config(&path).unwrap(), ctx.registry());
    }
}
