//! Command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for command operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()`/`tracing::error!()`
//! for internal details.

pub mod admin;
pub mod homes;
