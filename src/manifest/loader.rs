//! Manifest deserialization
//!
//! The loader turns raw YAML bytes into the typed [`Manifest`] model. An
//! empty or all-comments document is not a parse error: it deserializes to
//! a manifest with no cellblocks, which the processor then rejects. Only a
//! document that fails to match the expected shape surfaces as a YAML error.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Manifest;
use crate::error::Result;

/// Parse a manifest from raw YAML bytes
pub fn parse_manifest(bytes: &[u8]) -> Result<Manifest> {
    // A null top-level document (empty input) maps to None, not an error.
    let manifest: Option<Manifest> = serde_yaml::from_slice(bytes)?;
    let manifest = manifest.unwrap_or_default();
    debug!(cellblocks = manifest.len(), "parsed cellblock manifest");
    Ok(manifest)
}

/// Read and parse a manifest file from disk
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    debug!(path = %path.display(), "reading cellblock manifest");
    let bytes = fs::read(path)?;
    parse_manifest(&bytes)
}
