//! Hearth Core - Domain models and shared facilities
//!
//! This crate provides the foundational pieces shared by the store, engine,
//! and CLI:
//! - Player identity, home name, and location value types with validation
//! - Canonical structured error type with a stable code taxonomy
//! - Logging facility (schema constants, operation macros, initialization)
//! - Deployment configuration (the global home-count ceiling)

pub mod config;
pub mod errors;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use config::HearthConfig;
pub use errors::{HearthError, HearthErrorKind, Result};
pub use model::{Home, HomeLocation, HomeName, PlayerId};
