//! Manifest processor
//!
//! Turns a validated manifest into launcher invocations:
//! - [`CommandVector`] holds the ordered argument list for one invocation
//! - [`process_manifest`] renders one vector per cellblock, fail-fast

mod command;
mod render;

pub use command::CommandVector;
pub use render::process_manifest;
