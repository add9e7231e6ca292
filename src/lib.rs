//! # Ship-it CLI Library
//!
//! Core library functionality for the Ship-it release-automation CLI.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod manifest;
pub mod shipit;
pub mod verify;

/// CLI worker for driving release state in Ship-it
///
/// Marks releases as started or shipped against a Ship-it instance, verifies
/// the remote record reflects each update, and assembles MAR checksum
/// manifests from chain-of-trust artifacts.
#[derive(Parser)]
#[command(
    name = "shipit",
    version,
    about = "CLI worker for driving release state in Ship-it",
    long_about = "A command-line worker for release automation against a Ship-it instance.\n\nMarks releases as started or shipped, re-reads the remote record to confirm each\nupdate took effect, and assembles MAR checksum manifests from files placed into\nthe chain-of-trust download area by upstream pipeline steps."
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<commands::Commands>,
}
