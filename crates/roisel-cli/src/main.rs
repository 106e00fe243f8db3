mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roisel", about = "Helpers for MRI region-of-interest capture")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dataset metadata for a series
    Info(commands::info::InfoArgs),
    /// Save the normalized frame of a series as PNG or TIFF
    Export(commands::export::ExportArgs),
    /// Print the circles stored in an ROI table
    Inspect(commands::inspect::InspectArgs),
    /// Print or save the default capture configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
