use crate::domain::{CommandDescriptor, DescriptorError, DescriptorSource};

/// Periodic alarm reminding the user to switch tasks and stretch.
#[derive(Debug, Clone, Copy)]
pub struct TaskSwitchAlarm;

impl DescriptorSource for TaskSwitchAlarm {
    fn descriptor(&self) -> Result<CommandDescriptor, DescriptorError> {
        CommandDescriptor::new(
            "task-switch-alarm",
            "TUI App that notifies that you should do something else and stretch now!",
            "task_switch_alarm.bash",
        )
    }
}
