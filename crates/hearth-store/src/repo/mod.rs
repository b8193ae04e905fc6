//! Repository layer
//!
//! Stateless accessors over a `rusqlite::Connection`, one module per table.
//! Everything here is `Result`-based; the fail-safe defaults that command
//! handlers see are applied one layer up, in the `Store` facade.

pub mod homes;
pub mod limits;

pub use homes::HomeRepo;
pub use limits::LimitRepo;
