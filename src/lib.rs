//! Warden - Launch cellblocks from a declarative manifest
//!
//! Warden reads a YAML manifest declaring isolated execution environments
//! ("cellblocks") and renders each one into the ordered argument vector
//! needed to launch it via the external `cblock` program.
//!
//! # Example
//!
//! ```
//! use warden::{parse_manifest, process_manifest};
//!
//! let yaml = b"cellblocks:\n  - image: base:14.3\n    fdescfs: true\n";
//! let manifest = parse_manifest(yaml).unwrap();
//! let commands = process_manifest(&manifest, "/usr/local/bin/cblock").unwrap();
//! assert_eq!(
//!     commands[0].args(),
//!     &["/usr/local/bin/cblock", "launch", "--no-attach", "--name base:14.3", "--fdescfs"]
//! );
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod processor;

pub use error::{Result, WardenError};
pub use manifest::{load_manifest, parse_manifest, Cellblock, Manifest, PortMapping, Volume};
pub use output::{format_commands, OutputFormat};
pub use processor::{process_manifest, CommandVector};
