//! CLI command modules

use std::path::PathBuf;

use hearth_core::config::HearthConfig;
use hearth_store::Store;

pub mod homes;
pub mod info;
pub mod limit;
pub mod migrate;

/// Shared invocation context resolved from the global CLI options
#[derive(Debug, Clone)]
pub struct CliContext {
    pub db: PathBuf,
    pub config: Option<PathBuf>,
}

impl CliContext {
    /// The effective home-limit ceiling: from the config file if given,
    /// otherwise the built-in default.
    pub fn ceiling(&self) -> Result<u32, Box<dyn std::error::Error>> {
        let config = match &self.config {
            Some(path) => HearthConfig::load(path)?,
            None => HearthConfig::default(),
        };
        Ok(config.ceiling())
    }
}

/// Open the store at the context's database path, migrating as needed
pub fn open_store(ctx: &CliContext) -> Result<Store, Box<dyn std::error::Error>> {
    if let Some(parent) = ctx.db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let store = Store::open(&ctx.db, ctx.ceiling()?)?;
    Ok(store)
}
