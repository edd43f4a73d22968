//! Command descriptor types.

use serde::{Deserialize, Serialize};

use super::error::{DescriptorError, DescriptorField};

/// Launch metadata for one terminal app.
///
/// Fields are private so a descriptor can only be obtained through
/// [`CommandDescriptor::new`] (or deserialization, which routes through it),
/// and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CommandEntry")]
pub struct CommandDescriptor {
    name: String,
    description: String,
    command_to_execute: String,
}

impl CommandDescriptor {
    /// Create a descriptor, rejecting empty or whitespace-only fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mhb_core::CommandDescriptor;
    ///
    /// let echo = CommandDescriptor::new("echo", "Echo input", "echo.bash").unwrap();
    /// assert_eq!(echo.command_to_execute(), "echo.bash");
    ///
    /// assert!(CommandDescriptor::new("", "Echo input", "echo.bash").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        command_to_execute: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        let name = name.into();
        let description = description.into();
        let command_to_execute = command_to_execute.into();

        require_non_blank(&name, DescriptorField::Name)?;
        require_non_blank(&description, DescriptorField::Description)?;
        require_non_blank(&command_to_execute, DescriptorField::CommandToExecute)?;

        Ok(Self {
            name,
            description,
            command_to_execute,
        })
    }

    /// Unique identifier of the command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text shown to the user alongside the name.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Script or executable the launcher should invoke.
    pub fn command_to_execute(&self) -> &str {
        &self.command_to_execute
    }
}

fn require_non_blank(value: &str, field: DescriptorField) -> Result<(), DescriptorError> {
    if value.trim().is_empty() {
        return Err(DescriptorError::EmptyField(field));
    }
    Ok(())
}

/// Unvalidated descriptor as read from a config document.
///
/// Every field is optional so that absent or `null` values surface as
/// [`DescriptorError::MissingField`] instead of an opaque parse failure.
///
/// The launcher's `subCommands` key is read so it can be rejected: `null`
/// or `[]` is accepted, anything nested fails with
/// [`DescriptorError::NestedCommands`] rather than being dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_to_execute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_commands: Option<Vec<serde_json::Value>>,
}

impl CommandEntry {
    /// Validate the entry and turn it into a descriptor.
    pub fn into_descriptor(self) -> Result<CommandDescriptor, DescriptorError> {
        if let Some(nested) = self.sub_commands.as_ref().filter(|n| !n.is_empty()) {
            return Err(DescriptorError::NestedCommands {
                count: nested.len(),
            });
        }

        let name = self
            .name
            .ok_or(DescriptorError::MissingField(DescriptorField::Name))?;
        let description = self
            .description
            .ok_or(DescriptorError::MissingField(DescriptorField::Description))?;
        let command_to_execute = self.command_to_execute.ok_or(DescriptorError::MissingField(
            DescriptorField::CommandToExecute,
        ))?;
        CommandDescriptor::new(name, description, command_to_execute)
    }
}

impl TryFrom<CommandEntry> for CommandDescriptor {
    type Error = DescriptorError;

    fn try_from(entry: CommandEntry) -> Result<Self, Self::Error> {
        entry.into_descriptor()
    }
}

impl From<CommandDescriptor> for CommandEntry {
    fn from(descriptor: CommandDescriptor) -> Self {
        Self {
            name: Some(descriptor.name),
            description: Some(descriptor.description),
            command_to_execute: Some(descriptor.command_to_execute),
            sub_commands: None,
        }
    }
}

/// Something that contributes one descriptor to the registry.
///
/// Each app's configuration unit implements this; the registry builder
/// collects the results and reports failures at assembly time.
pub trait DescriptorSource: Send + Sync {
    fn descriptor(&self) -> Result<CommandDescriptor, DescriptorError>;
}

impl DescriptorSource for CommandDescriptor {
    fn descriptor(&self) -> Result<CommandDescriptor, DescriptorError> {
        Ok(self.clone())
    }
}

impl DescriptorSource for CommandEntry {
    fn descriptor(&self) -> Result<CommandDescriptor, DescriptorError> {
        self.clone().into_descriptor()
    }
}

impl<T: DescriptorSource + ?Sized> DescriptorSource for &T {
    fn descriptor(&self) -> Result<CommandDescriptor, DescriptorError> {
        (**self).descriptor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_complete_descriptor() {
        let descriptor =
            CommandDescriptor::new("task-switch-alarm", "Stretch reminder", "task_switch_alarm.bash")
                .unwrap();
        assert_eq!(descriptor.name(), "task-switch-alarm");
        assert_eq!(descriptor.description(), "Stretch reminder");
        assert_eq!(descriptor.command_to_execute(), "task_switch_alarm.bash");
    }

    #[test]
    fn test_new_rejects_empty_fields() {
        assert_eq!(
            CommandDescriptor::new("", "d", "c.bash"),
            Err(DescriptorError::EmptyField(DescriptorField::Name))
        );
        assert_eq!(
            CommandDescriptor::new("n", "   ", "c.bash"),
            Err(DescriptorError::EmptyField(DescriptorField::Description))
        );
        assert_eq!(
            CommandDescriptor::new("n", "d", "\t"),
            Err(DescriptorError::EmptyField(DescriptorField::CommandToExecute))
        );
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let descriptor = CommandDescriptor::new("echo", "Echo", "echo.bash").unwrap();
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "echo",
                "description": "Echo",
                "commandToExecute": "echo.bash",
            })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: CommandDescriptor = serde_json::from_str(
            r#"{"name":"echo","description":"Echo","commandToExecute":"echo.bash"}"#,
        )
        .unwrap();
        assert_eq!(ok.command_to_execute(), "echo.bash");

        let missing = serde_json::from_str::<CommandDescriptor>(r#"{"name":"echo","description":"Echo"}"#);
        let err = missing.unwrap_err().to_string();
        assert!(err.contains("commandToExecute"), "unexpected error: {err}");

        let empty = serde_json::from_str::<CommandDescriptor>(
            r#"{"name":"","description":"Echo","commandToExecute":"echo.bash"}"#,
        );
        assert!(empty.is_err());
    }

    #[test]
    fn test_entry_treats_null_as_missing() {
        let entry: CommandEntry = serde_json::from_str(
            r#"{"name":"echo","description":null,"commandToExecute":"echo.bash","subCommands":[]}"#,
        )
        .unwrap();
        assert_eq!(
            entry.into_descriptor(),
            Err(DescriptorError::MissingField(DescriptorField::Description))
        );
    }

    #[test]
    fn test_entry_rejects_nested_sub_commands() {
        let entry: CommandEntry = serde_json::from_str(
            r#"{"name":"echo","description":"Echo","commandToExecute":"echo.bash",
                "subCommands":[{"name":"loud","description":"Loud","commandToExecute":"loud.bash"}]}"#,
        )
        .unwrap();
        assert_eq!(
            entry.into_descriptor(),
            Err(DescriptorError::NestedCommands { count: 1 })
        );
    }

    #[test]
    fn test_entry_round_trips_through_descriptor() {
        let descriptor = CommandDescriptor::new("echo", "Echo", "echo.bash").unwrap();
        let entry = CommandEntry::from(descriptor.clone());
        assert_eq!(entry.descriptor(), Ok(descriptor));
    }
}
