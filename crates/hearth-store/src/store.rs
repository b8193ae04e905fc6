//! Store facade
//!
//! Owns the single long-lived connection and the configured ceiling, and
//! presents the contract the command layer programs against. Storage faults
//! stop here: every public operation converts an underlying error into a
//! conservative default (empty list, zero count, false, not-found, limit 1)
//! and emits a structured diagnostic, favouring the availability of the game
//! session over surfacing storage errors to players. The repo layer
//! underneath stays `Result`-based for callers that need the distinction.

use std::path::Path;

use hearth_core::model::{Home, HomeLocation, HomeName, PlayerId};
use rusqlite::Connection;

use crate::errors::Result;
use crate::repo::{HomeRepo, LimitRepo};
use crate::{db, migrations};

/// Implicit limit for players with no stored record
pub const DEFAULT_HOME_LIMIT: u32 = 1;

/// Persistent store for homes and per-player limits
///
/// One connection, synchronous access, opened once at startup and reused for
/// the process lifetime. Reconnection is not attempted; after a connection
/// fault every operation degrades to its safe default until restart.
pub struct Store {
    conn: Connection,
    ceiling: u32,
}

impl Store {
    /// Open (creating if needed) the database at `path` under the given ceiling
    ///
    /// Applies the static migrations and guarantees the limit table's range
    /// constraint matches `ceiling`, clamping stored values downward if the
    /// ceiling tightened since the last run.
    pub fn open<P: AsRef<Path>>(path: P, ceiling: u32) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Self::initialize(conn, ceiling)
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory(ceiling: u32) -> Result<Self> {
        let conn = db::open_in_memory()?;
        Self::initialize(conn, ceiling)
    }

    fn initialize(mut conn: Connection, ceiling: u32) -> Result<Self> {
        migrations::apply_migrations(&mut conn)?;
        migrations::ceiling::ensure_limit_ceiling(&mut conn, ceiling)?;
        tracing::debug!(ceiling, "store initialized");
        Ok(Self { conn, ceiling })
    }

    /// The configured global ceiling
    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    // --- Homes ---

    /// Store or replace a home; true on success
    pub fn upsert_home(&self, owner: &PlayerId, name: &HomeName, location: &HomeLocation) -> bool {
        match HomeRepo::upsert(&self.conn, owner, name, location) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    player_id = %owner,
                    home_name = name.as_str(),
                    error = %e,
                    "could not save home"
                );
                false
            }
        }
    }

    /// Look up the stored location for `(owner, name)`
    ///
    /// Returns the raw record; whether its world still resolves is the
    /// caller's concern.
    pub fn home_location(&self, owner: &PlayerId, name: &HomeName) -> Option<HomeLocation> {
        match HomeRepo::get(&self.conn, owner, name) {
            Ok(location) => location,
            Err(e) => {
                tracing::error!(
                    player_id = %owner,
                    home_name = name.as_str(),
                    error = %e,
                    "could not retrieve home"
                );
                None
            }
        }
    }

    /// A player's home names, lexicographically ascending
    ///
    /// The deterministic ordering backs every position-based operation,
    /// notably the excess-home deletion on limit decrease.
    pub fn home_names(&self, owner: &PlayerId) -> Vec<String> {
        match HomeRepo::list_names(&self.conn, owner) {
            Ok(names) => names,
            Err(e) => {
                tracing::error!(player_id = %owner, error = %e, "could not retrieve home list");
                Vec::new()
            }
        }
    }

    /// A player's full home records, lexicographically by name
    pub fn homes(&self, owner: &PlayerId) -> Vec<Home> {
        match HomeRepo::list(&self.conn, owner) {
            Ok(homes) => homes,
            Err(e) => {
                tracing::error!(player_id = %owner, error = %e, "could not retrieve homes");
                Vec::new()
            }
        }
    }

    /// Number of homes a player has
    pub fn home_count(&self, owner: &PlayerId) -> u32 {
        match HomeRepo::count(&self.conn, owner) {
            Ok(count) => count,
            Err(e) => {
                tracing::error!(player_id = %owner, error = %e, "could not retrieve home count");
                0
            }
        }
    }

    /// Delete a home; true iff a record existed and was removed
    pub fn delete_home(&self, owner: &PlayerId, name: &HomeName) -> bool {
        match HomeRepo::delete(&self.conn, owner, name) {
            Ok(existed) => existed,
            Err(e) => {
                tracing::error!(
                    player_id = %owner,
                    home_name = name.as_str(),
                    error = %e,
                    "could not delete home"
                );
                false
            }
        }
    }

    // --- Limits ---

    /// A player's home limit
    ///
    /// Defaults to 1 when no record exists, and on storage fault.
    pub fn home_limit(&self, owner: &PlayerId) -> u32 {
        match LimitRepo::get(&self.conn, owner) {
            Ok(Some(limit)) => limit,
            Ok(None) => DEFAULT_HOME_LIMIT,
            Err(e) => {
                tracing::error!(player_id = %owner, error = %e, "could not retrieve home limit");
                DEFAULT_HOME_LIMIT
            }
        }
    }

    /// Set a player's home limit; false without writing if out of range
    pub fn set_home_limit(&self, owner: &PlayerId, limit: u32) -> bool {
        if limit < 1 || limit > self.ceiling {
            return false;
        }

        match LimitRepo::set(&self.conn, owner, limit) {
            Ok(()) => {
                tracing::debug!(player_id = %owner, limit, "set home limit");
                true
            }
            Err(e) => {
                tracing::error!(player_id = %owner, limit, error = %e, "could not set home limit");
                false
            }
        }
    }

    /// Raise a player's limit by one; false if already at the ceiling
    pub fn increase_home_limit(&self, owner: &PlayerId) -> bool {
        let current = self.home_limit(owner);
        if current >= self.ceiling {
            return false;
        }

        self.set_home_limit(owner, current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> HomeLocation {
        HomeLocation::new("overworld", 0.5, 64.0, -9.25, 180.0, 0.0)
    }

    #[test]
    fn test_round_trip_is_case_insensitive() {
        let store = Store::open_in_memory(10).unwrap();
        let owner = PlayerId::random();

        let upper = HomeName::new("Home").unwrap();
        let lower = HomeName::new("home").unwrap();

        assert!(store.upsert_home(&owner, &upper, &loc()));
        assert_eq!(store.home_location(&owner, &lower), Some(loc()));
        assert_eq!(store.home_location(&owner, &upper), Some(loc()));
    }

    #[test]
    fn test_limit_defaults_to_one() {
        let store = Store::open_in_memory(10).unwrap();
        let owner = PlayerId::random();

        assert_eq!(store.home_limit(&owner), 1);
    }

    #[test]
    fn test_set_limit_rejects_out_of_range() {
        let store = Store::open_in_memory(10).unwrap();
        let owner = PlayerId::random();

        assert!(!store.set_home_limit(&owner, 0));
        assert!(!store.set_home_limit(&owner, 11));
        assert_eq!(store.home_limit(&owner), 1);

        assert!(store.set_home_limit(&owner, 10));
        assert_eq!(store.home_limit(&owner), 10);
    }

    #[test]
    fn test_increase_stops_at_ceiling() {
        let store = Store::open_in_memory(3).unwrap();
        let owner = PlayerId::random();

        assert!(store.increase_home_limit(&owner));
        assert!(store.increase_home_limit(&owner));
        assert_eq!(store.home_limit(&owner), 3);

        assert!(!store.increase_home_limit(&owner));
        assert_eq!(store.home_limit(&owner), 3);
    }
}
