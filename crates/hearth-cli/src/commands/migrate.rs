//! Migrate command
//!
//! Usage: hearth migrate [--db PATH] [--config PATH]

use clap::Args;

use super::{open_store, CliContext};

#[derive(Debug, Args)]
pub struct MigrateArgs {}

/// Execute migrate command
pub fn execute(_args: MigrateArgs, ctx: &CliContext) -> Result<(), Box<dyn std::error::Error>> {
    // Opening the store applies the static migrations and rebuilds the
    // limit constraint if the configured ceiling changed.
    let store = open_store(ctx)?;

    println!(
        "Database {} migrated (home-limit ceiling: {})",
        ctx.db.display(),
        store.ceiling()
    );

    Ok(())
}
