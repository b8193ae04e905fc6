//! Hearth Engine - Command orchestration layer
//!
//! Implements the semantics behind the player and admin commands (limit
//! enforcement, cascading deletion, world resolution) on top of the store,
//! with host concerns abstracted behind traits. Command *parsing* and chat
//! presentation belong to the host glue and are not here.

pub mod commands;
pub mod host;

pub use commands::homes::DEFAULT_HOME_NAME;
pub use host::{StaticWorlds, WorldResolver};
