//! Deployment configuration
//!
//! One externally supplied value matters: the global home-count ceiling.
//! It is read once at startup and threaded explicitly into the store rather
//! than held as ambient state, so tests can run independently configured
//! store instances side by side.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Built-in default for the global home-count ceiling
pub const DEFAULT_MAX_HOME_LIMIT: u32 = 10;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Hearth deployment configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HearthConfig {
    /// Maximum value any player's home limit may take
    pub max_home_limit: u32,
}

impl Default for HearthConfig {
    fn default() -> Self {
        Self {
            max_home_limit: DEFAULT_MAX_HOME_LIMIT,
        }
    }
}

impl HearthConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// * `ConfigError::Read` - the file could not be read
    /// * `ConfigError::Parse` - the file is not valid TOML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: HearthConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// The effective global ceiling
    ///
    /// A configured value below 1 is invalid and falls back to the built-in
    /// default with a logged warning.
    pub fn ceiling(&self) -> u32 {
        if self.max_home_limit < 1 {
            tracing::warn!(
                configured = self.max_home_limit,
                fallback = DEFAULT_MAX_HOME_LIMIT,
                "invalid max_home_limit in config (must be >= 1), using default"
            );
            DEFAULT_MAX_HOME_LIMIT
        } else {
            self.max_home_limit
        }
    }
}
