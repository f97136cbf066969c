//! JSON output formatting

use crate::processor::CommandVector;

/// The full command list as a JSON array of argument arrays
pub fn format_json(commands: &[CommandVector]) -> String {
    serde_json::to_string_pretty(commands).unwrap_or_else(|_| "[]".to_string())
}
