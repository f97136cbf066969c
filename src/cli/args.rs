//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "warden")]
#[command(author, version, about = "Launch cellblocks from a manifest", long_about = None)]
pub struct Args {
    /// Installation prefix
    #[arg(short = 'P', long, default_value = "/usr/local")]
    pub prefix: String,

    /// Path to cellblock manifest (default: <prefix>/etc/cellblocks.yaml)
    #[arg(short = 'p', long = "manifest-path", value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Output the command list as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Manifest path, falling back to the prefix-derived default.
    ///
    /// Resolved after parsing so `-P` alone moves the default along with it.
    pub fn resolved_manifest_path(&self) -> PathBuf {
        self.manifest_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.prefix).join("etc/cellblocks.yaml"))
    }

    /// Path of the launcher program under the prefix
    pub fn launcher_path(&self) -> String {
        format!("{}/bin/cblock", self.prefix)
    }
}
