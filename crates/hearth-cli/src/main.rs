//! Hearth CLI
//!
//! Offline admin tool for a Hearth homes database: apply migrations, inspect
//! and edit home and limit records without a running game server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hearth_core::logging::{self, Profile};

mod commands;

use commands::CliContext;

#[derive(Debug, Parser)]
#[command(name = "hearth")]
#[command(about = "Hearth - player homes administration", long_about = None)]
struct Cli {
    /// Path to the homes database
    #[arg(long, global = true, default_value = "hearth/homes.db")]
    db: PathBuf,

    /// Path to a hearth.toml config file (for the home-limit ceiling)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply migrations and ensure the configured ceiling
    Migrate(commands::migrate::MigrateArgs),
    /// Home record operations
    Homes(commands::homes::HomesArgs),
    /// Home limit operations
    Limit(commands::limit::LimitArgs),
    /// Summarize a player's homes and limit
    Info(commands::info::InfoArgs),
}

fn main() {
    let cli = Cli::parse();

    logging::init(Profile::Development);

    let ctx = CliContext {
        db: cli.db,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args, &ctx),
        Commands::Homes(args) => commands::homes::execute(args, &ctx),
        Commands::Limit(args) => commands::limit::execute(args, &ctx),
        Commands::Info(args) => commands::info::execute(args, &ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
