mod app;
mod chat;
mod cli;
mod config;
mod db;
mod error;
mod events;
mod gallery;
mod markers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "waymark", version, about = "Offline campus map companion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session in the terminal
    Run,
    /// Print the persisted slots
    Inspect,
    /// Delete all persisted state after confirmation
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::WaymarkConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for the session output.
    let filter = EnvFilter::try_new(&config.app.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run => cli::run::run(&config)?,
        Command::Inspect => cli::inspect::inspect(&config)?,
        Command::Reset => cli::reset::reset(&config)?,
    }

    Ok(())
}
