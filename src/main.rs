//! Warden CLI - Launch cellblocks from a declarative manifest

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use warden::cli::Args;
use warden::{format_commands, load_manifest, process_manifest, OutputFormat};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if args.verbose { "warden=debug" } else { "warn" })
        }))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> warden::Result<()> {
    let manifest_path = args.resolved_manifest_path();
    let launcher = args.launcher_path();
    debug!(manifest = %manifest_path.display(), %launcher, "processing manifest");

    let manifest = load_manifest(&manifest_path)?;
    let commands = process_manifest(&manifest, &launcher)?;
    debug!(count = commands.len(), "rendered launcher invocations");

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    println!("{}", format_commands(&commands, &format));
    Ok(())
}
