//! archmem - architecture memory toolkit

mod arch_cli;
mod memory_cli;

use clap::{Parser, Subcommand};
use memory::MemoryConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "archmem")]
#[command(about = "Architecture memory and C4 diagram toolkit", version)]
struct Cli {
    /// Storage file (default: $ARCH_MEMORY_PATH or data/architecture-memory.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Systems, people and relationships
    #[command(subcommand)]
    Memory(memory_cli::MemoryCommands),
    /// Diagrams and host tools
    #[command(subcommand)]
    Arch(arch_cli::ArchCommands),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = MemoryConfig::from_env();
    if let Some(path) = cli.store {
        config = config.with_path(path);
    }

    match cli.command {
        Commands::Memory(cmd) => memory_cli::run(cmd, &config)?,
        Commands::Arch(cmd) => arch_cli::run(cmd, &config)?,
    }

    Ok(())
}
