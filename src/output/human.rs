//! Human-readable output formatting

use crate::processor::CommandVector;

/// One space-joined command line per cellblock
pub fn format_human(commands: &[CommandVector]) -> String {
    commands
        .iter()
        .map(CommandVector::to_command_line)
        .collect::<Vec<_>>()
        .join("\n")
}
