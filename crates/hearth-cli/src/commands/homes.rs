//! Home record commands
//!
//! Usage: hearth homes <list|set|delete> <PLAYER> [...]

use clap::{Args, Subcommand};

use hearth_core::model::{HomeLocation, PlayerId};
use hearth_engine::commands::homes::{delete_home, set_home};
use hearth_engine::DEFAULT_HOME_NAME;

use super::{open_store, CliContext};

#[derive(Debug, Args)]
pub struct HomesArgs {
    #[command(subcommand)]
    pub command: HomesCommand,
}

#[derive(Debug, Subcommand)]
pub enum HomesCommand {
    /// List a player's homes
    List(ListArgs),
    /// Save or move a home
    Set(SetArgs),
    /// Delete a home
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Player UUID
    pub player: PlayerId,

    /// Print coordinates alongside names
    #[arg(long)]
    pub coords: bool,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Player UUID
    pub player: PlayerId,

    /// World the home lies in
    pub world: String,

    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    #[arg(allow_negative_numbers = true)]
    pub y: f64,
    #[arg(allow_negative_numbers = true)]
    pub z: f64,

    /// Home name (defaults to "home")
    #[arg(long, default_value = DEFAULT_HOME_NAME)]
    pub name: String,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub yaw: f32,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pitch: f32,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Player UUID
    pub player: PlayerId,

    /// Home name
    pub name: String,
}

/// Execute homes command
pub fn execute(args: HomesArgs, ctx: &CliContext) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        HomesCommand::List(list_args) => execute_list(list_args, ctx),
        HomesCommand::Set(set_args) => execute_set(set_args, ctx),
        HomesCommand::Delete(delete_args) => execute_delete(delete_args, ctx),
    }
}

fn execute_list(args: ListArgs, ctx: &CliContext) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(ctx)?;

    let homes = store.homes(&args.player);
    if homes.is_empty() {
        println!("No homes set for {}", args.player);
        return Ok(());
    }

    for home in homes {
        if args.coords {
            println!(
                "{}  {} ({:.1}, {:.1}, {:.1})",
                home.name, home.location.world, home.location.x, home.location.y, home.location.z
            );
        } else {
            println!("{}", home.name);
        }
    }

    Ok(())
}

fn execute_set(args: SetArgs, ctx: &CliContext) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(ctx)?;

    let location = HomeLocation::new(args.world, args.x, args.y, args.z, args.yaw, args.pitch);
    set_home(&store, &args.player, &args.name, &location)?;

    println!("Home '{}' set for {}", args.name.to_lowercase(), args.player);

    Ok(())
}

fn execute_delete(args: DeleteArgs, ctx: &CliContext) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(ctx)?;

    if delete_home(&store, &args.player, &args.name) {
        println!("Home '{}' deleted", args.name.to_lowercase());
    } else {
        return Err(format!("Home '{}' not found", args.name).into());
    }

    Ok(())
}
