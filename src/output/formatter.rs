//! Output formatting

use crate::output::human::format_human;
use crate::output::json::format_json;
use crate::processor::CommandVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_commands(commands: &[CommandVector], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(commands),
        OutputFormat::Json => format_json(commands),
    }
}
