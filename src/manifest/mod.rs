//! Manifest module for the cellblock configuration model
//!
//! A manifest is a YAML document declaring one or more cellblocks, each
//! with its own:
//! - base image and optional network
//! - pseudo-filesystem switches (fdescfs, procfs, tmpfs)
//! - volume mounts and port mappings

mod loader;
mod types;

pub use loader::{load_manifest, parse_manifest};
pub use types::{Cellblock, Manifest, PortMapping, Volume};
