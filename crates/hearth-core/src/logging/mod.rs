//! Logging facility
//!
//! Structured logging for the workspace:
//! - Canonical schema constants for field keys and event names
//! - Operation lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - One-shot initialization over `tracing-subscriber`
//!
//! The engine layer owns operation lifecycle logging; the store and core
//! layers emit only `tracing::debug!`/`tracing::error!` detail events.

pub mod init;
pub mod macros;
pub mod schema;

pub use init::{init, Profile};
