//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums and idempotent application
//! - Embedded SQL migrations for the static part of the schema
//! - Ceiling-aware probe-and-rebuild for the limit table's range constraint

mod checksums;
mod embedded;
mod runner;

pub mod ceiling;

pub use runner::apply_migrations;
