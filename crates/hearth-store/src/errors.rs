//! Error handling for hearth-store
//!
//! Wraps the core HearthError with store-specific helpers

use hearth_core::errors::{HearthError, HearthErrorKind};

/// Result type alias using HearthError
pub type Result<T> = std::result::Result<T, HearthError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> HearthError {
    HearthError::new(HearthErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> HearthError {
    HearthError::new(HearthErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}
