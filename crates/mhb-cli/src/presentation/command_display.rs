//! Rendering of descriptors and registries for the terminal.
//!
//! Functions return strings so handlers decide where output goes.

use std::fmt::Write as _;

use mhb_core::{CommandDescriptor, CommandRegistry};

use super::tables::{separator, truncate_string};

const NAME_WIDTH: usize = 24;
const DESCRIPTION_WIDTH: usize = 50;

/// Render the registry as a fixed-width table.
pub fn render_table(registry: &CommandRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:<DESCRIPTION_WIDTH$} Command",
        "Name", "Description"
    );
    let _ = writeln!(out, "{}", separator(NAME_WIDTH + DESCRIPTION_WIDTH + 24));

    for command in registry {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$} {:<DESCRIPTION_WIDTH$} {}",
            truncate_string(command.name(), NAME_WIDTH - 1),
            truncate_string(command.description(), DESCRIPTION_WIDTH - 1),
            command.command_to_execute()
        );
    }
    out
}

/// Render one descriptor as `key: value` lines.
pub fn render_descriptor(descriptor: &CommandDescriptor) -> String {
    format!(
        "name:             {}\ndescription:      {}\ncommandToExecute: {}",
        descriptor.name(),
        descriptor.description(),
        descriptor.command_to_execute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CommandRegistry {
        CommandRegistry::builder()
            .push(CommandDescriptor::new("echo", "Echo input", "echo.bash").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_table_has_header_and_one_row_per_command() {
        let table = render_table(&registry());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].starts_with("echo"));
        assert!(lines[2].ends_with("echo.bash"));
    }

    #[test]
    fn test_descriptor_lists_all_fields() {
        let registry = registry();
        let rendered = render_descriptor(registry.get("echo").unwrap());
        assert!(rendered.contains("name:             echo"));
        assert!(rendered.contains("commandToExecute: echo.bash"));
    }
}
