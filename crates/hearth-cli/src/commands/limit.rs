//! Home limit commands
//!
//! Usage: hearth limit <get|set|increase|decrease> <PLAYER> [...]

use clap::{Args, Subcommand};

use hearth_core::model::PlayerId;
use hearth_engine::commands::admin::{decrease_limit, increase_limit};

use super::{open_store, CliContext};

#[derive(Debug, Args)]
pub struct LimitArgs {
    #[command(subcommand)]
    pub command: LimitCommand,
}

#[derive(Debug, Subcommand)]
pub enum LimitCommand {
    /// Print a player's current limit
    Get(PlayerArg),
    /// Set a player's limit to an exact value
    Set(SetArgs),
    /// Raise a player's limit by one
    Increase(PlayerArg),
    /// Lower a player's limit by one, auto-deleting excess homes
    Decrease(PlayerArg),
}

#[derive(Debug, Args)]
pub struct PlayerArg {
    /// Player UUID
    pub player: PlayerId,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Player UUID
    pub player: PlayerId,

    /// New limit, within [1, ceiling]
    pub value: u32,
}

/// Execute limit command
pub fn execute(args: LimitArgs, ctx: &CliContext) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(ctx)?;

    match args.command {
        LimitCommand::Get(get_args) => {
            println!("{}", store.home_limit(&get_args.player));
        }
        LimitCommand::Set(set_args) => {
            if !store.set_home_limit(&set_args.player, set_args.value) {
                return Err(format!(
                    "limit {} is outside [1, {}]",
                    set_args.value,
                    store.ceiling()
                )
                .into());
            }
            println!("Limit for {} set to {}", set_args.player, set_args.value);
        }
        LimitCommand::Increase(inc_args) => {
            let new_limit = increase_limit(&store, &inc_args.player)?;
            println!("Limit for {} increased to {}", inc_args.player, new_limit);
        }
        LimitCommand::Decrease(dec_args) => {
            let result = decrease_limit(&store, &dec_args.player)?;
            for name in &result.deleted {
                println!("Auto-deleted home '{}'", name);
            }
            println!(
                "Limit for {} decreased to {}",
                dec_args.player, result.new_limit
            );
        }
    }

    Ok(())
}
