//! Manifest-to-command rendering
//!
//! A single deterministic pass over the manifest. Each cellblock renders to
//! one [`CommandVector`] in a fixed field order; any invalid cellblock
//! aborts the whole run with no partial result, so a manifest either
//! launches completely or not at all.

use tracing::debug;

use crate::error::{Result, WardenError};
use crate::manifest::{Cellblock, Manifest, PortMapping, Volume};
use crate::processor::command::CommandVector;

/// Render one launcher invocation per cellblock, in manifest order.
///
/// Fails with [`WardenError::EmptyManifest`] when no cellblocks are
/// declared, or [`WardenError::MissingImage`] (carrying the 1-based
/// position) when a cellblock has no image. Validation failure discards
/// every previously rendered vector.
pub fn process_manifest(manifest: &Manifest, prog: &str) -> Result<Vec<CommandVector>> {
    if manifest.is_empty() {
        return Err(WardenError::EmptyManifest);
    }
    let mut commands = Vec::with_capacity(manifest.len());
    for (index, block) in manifest.cellblocks.iter().enumerate() {
        let position = index + 1;
        let cmd = render_cellblock(block, prog, position)?;
        debug!(position, image = %block.image, "rendered cellblock");
        commands.push(cmd);
    }
    Ok(commands)
}

fn render_cellblock(block: &Cellblock, prog: &str, position: usize) -> Result<CommandVector> {
    let mut cmd = CommandVector::new(prog);
    cmd.push_arg("launch");
    if block.image.is_empty() {
        return Err(WardenError::MissingImage(position));
    }
    cmd.push_flag("no-attach");
    cmd.push_option("name", &block.image);
    if let Some(network) = block.network.as_deref().filter(|n| !n.is_empty()) {
        cmd.push_option("network", network);
    }
    if block.fdescfs {
        cmd.push_flag("fdescfs");
    }
    if block.procfs {
        cmd.push_flag("procfs");
    }
    if block.tmpfs {
        cmd.push_flag("tmpfs");
    }
    for vol in &block.volumes {
        cmd.push_option("volume", &volume_spec(vol));
    }
    for port in &block.ports {
        cmd.push_option("port", &port_spec(port));
    }
    Ok(cmd)
}

// Values are joined verbatim; keeping ':' out of components is on the caller.
fn volume_spec(vol: &Volume) -> String {
    format!(
        "{}:{}:{}:{}",
        vol.fs_type, vol.origin, vol.mount_point, vol.perms
    )
}

fn port_spec(port: &PortMapping) -> String {
    if port.public {
        format!("{}:{}:public", port.host_port, port.container_port)
    } else {
        format!("{}:{}", port.host_port, port.container_port)
    }
}
