//! Show command handler.

use mhb_core::CommandDescriptor;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_descriptor;

/// Find a command by name, listing the known names when it is missing.
pub fn find<'a>(ctx: &'a CliContext, name: &str) -> Result<&'a CommandDescriptor, CliError> {
    ctx.registry().get(name).ok_or_else(|| {
        let known: Vec<_> = ctx.registry().names().collect();
        CliError::Arguments(format!(
            "unknown command '{name}' (known: {})",
            known.join(", ")
        ))
    })
}

/// Print a single command.
pub fn execute(ctx: &CliContext, name: &str) -> Result<(), CliError> {
    let descriptor = find(ctx, name)?;
    println!("{}", render_descriptor(descriptor));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::RegistryOrigin;

    fn builtin_ctx() -> CliContext {
        CliContext::new(mhb_core::registry().unwrap(), RegistryOrigin::Builtin)
    }

    #[test]
    fn test_find_known_command() {
        let ctx = builtin_ctx();
        let alarm = find(&ctx, "task-switch-alarm").unwrap();
        assert_eq!(alarm.command_to_execute(), "task_switch_alarm.bash");
    }

    #[test]
    fn test_find_unknown_command_lists_known_names() {
        let ctx = builtin_ctx();
        let err = find(&ctx, "nope").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("echo, task-switch-alarm"));
    }
}
