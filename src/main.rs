//! # Ship-it CLI
//!
//! A command-line worker for release automation against a Ship-it instance.
//!
//! The `shipit` CLI runs as one task inside a continuous-delivery pipeline:
//! the orchestrator hands it a release name plus an instance config, it
//! performs one or two HTTP calls, confirms the remote record reflects the
//! update, and exits. There are no retries and no durable state.
//!
//! ## Quick start
//!
//! ```bash
//! # Mark a release as shipped and confirm Ship-it agrees
//! shipit ship Firefox-59.0b1-build1
//!
//! # Submit a new release, then mark it as started
//! shipit start Firefox-59.0b1-build1 --data release.json
//!
//! # Assemble the MAR checksum manifest from chain-of-trust artifacts
//! shipit manifest --work-dir /work --artifacts artifacts.json
//! ```
//!
//! ## Configuration
//!
//! Instance credentials live in `shipitconfig.yaml` (see [`shipit_cli::config`]);
//! `${VAR}` placeholders are expanded from the environment so secrets stay out
//! of the file. Log verbosity follows `RUST_LOG`.

use anyhow::Result;
use clap::Parser;
use shipit_cli::{commands, Cli};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap_or_else(|| {
        eprintln!("No command provided. Use --help to see available commands.");
        std::process::exit(1);
    });
    commands::run(cmd).await
}
