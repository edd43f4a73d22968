use crate::domain::{CommandDescriptor, DescriptorError, DescriptorSource};

/// Prints its arguments back to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Echo;

impl DescriptorSource for Echo {
    fn descriptor(&self) -> Result<CommandDescriptor, DescriptorError> {
        CommandDescriptor::new(
            "echo",
            "Prints whatever you type back to the terminal.",
            "echo.bash",
        )
    }
}
