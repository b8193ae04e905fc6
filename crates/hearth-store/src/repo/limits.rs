//! Limit record accessors
//!
//! Persists `player → max_homes` rows in `player_home_limits`. Range
//! enforcement happens twice: the facade validates against the configured
//! ceiling before writing, and the table's CHECK constraint backstops it.

use hearth_core::model::PlayerId;
use rusqlite::{Connection, OptionalExtension};

use crate::errors::{from_rusqlite, Result};

/// SQLite repository for limit records
pub struct LimitRepo;

impl LimitRepo {
    /// Get the stored limit for a player, if a record exists
    ///
    /// Absence is not an error: a player without a row has the implicit
    /// default limit, which is the facade's concern.
    pub fn get(conn: &Connection, owner: &PlayerId) -> Result<Option<u32>> {
        let limit: Option<u32> = conn
            .query_row(
                "SELECT max_homes FROM player_home_limits WHERE uuid = ?1",
                [owner.to_string()],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;

        Ok(limit)
    }

    /// Store or replace the limit for a player
    pub fn set(conn: &Connection, owner: &PlayerId, limit: u32) -> Result<()> {
        conn.execute(
            "INSERT OR REPLACE INTO player_home_limits (uuid, max_homes) VALUES (?1, ?2)",
            rusqlite::params![owner.to_string(), limit],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }
}
