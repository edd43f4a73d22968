//! Built-in terminal apps and the canonical registry accessor.
//!
//! Each app lives in its own module and contributes exactly one descriptor.
//! Adding an app means adding a module and one line to [`BUILTIN_APPS`].

mod echo;
mod task_switch_alarm;

use std::sync::LazyLock;

use crate::domain::{CommandRegistry, DescriptorSource, RegistryBuilder, RegistryError};

pub use echo::Echo;
pub use task_switch_alarm::TaskSwitchAlarm;

/// Every built-in app, in the order the launcher lists them.
pub static BUILTIN_APPS: &[&dyn DescriptorSource] = &[&Echo, &TaskSwitchAlarm];

static REGISTRY: LazyLock<Result<CommandRegistry, RegistryError>> =
    LazyLock::new(|| build_registry(BUILTIN_APPS));

/// Assemble a registry from an explicit list of sources.
pub fn build_registry(sources: &[&dyn DescriptorSource]) -> Result<CommandRegistry, RegistryError> {
    RegistryBuilder::new().extend(sources.iter().copied()).build()
}

/// The registry of built-in apps.
///
/// Assembly happens once per process; later calls return the same
/// (shared, immutable) registry or the same assembly error.
pub fn registry() -> Result<CommandRegistry, RegistryError> {
    (*REGISTRY).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommandDescriptor, DescriptorError};

    struct Fixed(&'static str, &'static str);

    impl DescriptorSource for Fixed {
        fn descriptor(&self) -> Result<CommandDescriptor, DescriptorError> {
            CommandDescriptor::new(self.0, "fixture", self.1)
        }
    }

    #[test]
    fn test_builtin_registry_contents() {
        let registry = registry().unwrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["echo", "task-switch-alarm"]);
        assert_eq!(registry.len(), BUILTIN_APPS.len());

        let alarm = registry.get("task-switch-alarm").unwrap();
        assert_eq!(alarm.command_to_execute(), "task_switch_alarm.bash");
        assert_eq!(
            registry.get("echo").unwrap().command_to_execute(),
            "echo.bash"
        );
    }

    #[test]
    fn test_registry_accessor_is_idempotent() {
        assert_eq!(registry(), registry());
    }

    #[test]
    fn test_build_registry_rejects_shared_name() {
        let first = Fixed("echo", "echo.bash");
        let second = Fixed("echo", "other_echo.bash");
        let result = build_registry(&[&first, &second]);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateName { ref name, first: 0, duplicate: 1 }) if name == "echo"
        ));
    }
}
