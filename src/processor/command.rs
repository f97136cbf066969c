//! CommandVector struct definition
//!
//! A CommandVector is the ordered argument list for one invocation of the
//! launcher program. Arguments are appended through a small builder API
//! rather than ad-hoc string concatenation, but an option and its value
//! still land in a single space-joined element (`"--name base:14.3"`),
//! matching what the launcher wrapper scripts expect.

use serde::Serialize;

/// The ordered argument list for one launcher invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandVector {
    args: Vec<String>,
}

impl CommandVector {
    /// Create a new vector with the launcher program path as argv[0]
    pub fn new(prog: &str) -> Self {
        Self {
            args: vec![prog.to_string()],
        }
    }

    /// Append a literal argument (subcommand names)
    pub fn push_arg(&mut self, arg: &str) {
        self.args.push(arg.to_string());
    }

    /// Append a presence-only switch as `--option`
    pub fn push_flag(&mut self, option: &str) {
        self.args.push(format!("--{}", option));
    }

    /// Append an option with a value as a single `--option value` element
    pub fn push_option(&mut self, option: &str, value: &str) {
        self.args.push(format!("--{} {}", option, value));
    }

    /// The completed argument list
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Render the invocation as a single space-joined command line
    pub fn to_command_line(&self) -> String {
        self.args.join(" ")
    }
}
