use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::constants::SHIPIT_CONFIG;

pub mod completions;
pub mod manifest;
pub mod ship;
pub mod start;

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Mark a release as shipped, then confirm Ship-it agrees")]
    Ship {
        release_name: String,
        #[arg(long, default_value = SHIPIT_CONFIG)]
        config: PathBuf,
    },
    #[command(about = "Submit a new release, then mark it as started")]
    Start {
        release_name: String,
        /// JSON file with the new-release submission data
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value = SHIPIT_CONFIG)]
        config: PathBuf,
    },
    #[command(
        about = "Assemble the unsigned MAR checksum manifest from chain-of-trust artifacts"
    )]
    Manifest {
        /// Work dir whose cot/ subdirectory holds the downloaded artifacts
        #[arg(long)]
        work_dir: PathBuf,
        /// JSON file with the [{taskId, path}, ...] artifact descriptors
        #[arg(long)]
        artifacts: PathBuf,
    },
    #[command(about = "Emit shell completion scripts (bash/zsh/fish)")]
    Completions { shell: String },
}

pub async fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Ship {
            release_name,
            config,
        } => ship::run(&release_name, &config).await,
        Commands::Start {
            release_name,
            data,
            config,
        } => start::run(&release_name, &data, &config).await,
        Commands::Manifest {
            work_dir,
            artifacts,
        } => manifest::run(&work_dir, &artifacts),
        Commands::Completions { shell } => completions::run(shell),
    }
}
