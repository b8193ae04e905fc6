//! Info command
//!
//! Usage: hearth info <PLAYER>

use clap::Args;

use hearth_core::model::PlayerId;
use hearth_engine::commands::admin::limit_info;

use super::{open_store, CliContext};

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Player UUID
    pub player: PlayerId,
}

/// Execute info command
pub fn execute(args: InfoArgs, ctx: &CliContext) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(ctx)?;

    let info = limit_info(&store, &args.player);

    println!("Homes for {}: {} / {}", args.player, info.count, info.limit);
    if info.names.is_empty() {
        println!("  (none)");
    } else {
        for name in &info.names {
            println!("  {}", name);
        }
    }

    Ok(())
}
