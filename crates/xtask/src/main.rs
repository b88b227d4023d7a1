//! Development tasks for the craft workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{CheckCraft, Probe, Validate};

/// Development tasks for the craft workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for craft content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load and validate every content file
    Validate(Validate),

    /// Run the anvil/forge detector at a location
    Probe(Probe),

    /// Ask a craft system whether a crafter may begin
    CheckCraft(CheckCraft),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for CRAFT_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();
    utils::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate(cmd) => cmd.execute(),
        Command::Probe(cmd) => cmd.execute(),
        Command::CheckCraft(cmd) => cmd.execute(),
    }
}
