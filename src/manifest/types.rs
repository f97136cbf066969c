//! Manifest struct definitions
//!
//! These structs mirror the shape of the YAML manifest exactly. They carry
//! no behavior; validation beyond type/shape conformance lives in the
//! processor so that a structurally valid document always deserializes.

use serde::Deserialize;

/// One host-to-cellblock port mapping
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortMapping {
    /// Port bound on the host side
    #[serde(default)]
    pub host_port: String,
    /// Port exposed inside the cellblock
    #[serde(default)]
    pub container_port: String,
    /// Whether the mapping is reachable from outside the host
    #[serde(default)]
    pub public: bool,
}

/// One filesystem mounted into a cellblock
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Volume {
    /// Filesystem type (ufs, zfs, ...)
    #[serde(rename = "type", default)]
    pub fs_type: String,
    /// Device path or dataset backing the volume
    #[serde(default)]
    pub origin: String,
    /// Mount point inside the cellblock
    #[serde(rename = "mountpoint", default)]
    pub mount_point: String,
    /// Mount permissions (rw, ro)
    #[serde(default)]
    pub perms: String,
}

/// One declared isolated execution environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cellblock {
    /// Base image to launch from; the only required field
    #[serde(default)]
    pub image: String,
    /// Network to attach the cellblock to
    #[serde(default)]
    pub network: Option<String>,
    /// Mount fdescfs inside the cellblock
    #[serde(default)]
    pub fdescfs: bool,
    /// Mount procfs inside the cellblock
    #[serde(default)]
    pub procfs: bool,
    /// Mount tmpfs inside the cellblock
    #[serde(default)]
    pub tmpfs: bool,
    /// Volume mounts, in declaration order
    #[serde(default)]
    pub volumes: Vec<Volume>,
    /// Port mappings, in declaration order
    #[serde(default)]
    pub ports: Vec<PortMapping>,
}

/// The full cellblock manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Cellblocks in declaration order
    #[serde(default)]
    pub cellblocks: Vec<Cellblock>,
}

impl Manifest {
    /// Check whether the manifest declares any cellblocks
    pub fn is_empty(&self) -> bool {
        self.cellblocks.is_empty()
    }

    /// Number of cellblocks declared
    pub fn len(&self) -> usize {
        self.cellblocks.len()
    }
}
