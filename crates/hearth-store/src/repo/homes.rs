//! Home record accessors
//!
//! Persists `(player, name) → location` rows in `player_homes`. Names arrive
//! already normalized (`HomeName` lower-cases on construction), and the
//! column collates NOCASE, so lookups are case-insensitive through both
//! layers.

use hearth_core::model::{Home, HomeLocation, HomeName, PlayerId};
use rusqlite::{Connection, OptionalExtension};

use crate::errors::{from_rusqlite, Result};

/// SQLite repository for home records
pub struct HomeRepo;

impl HomeRepo {
    /// Store or replace the home for `(owner, name)`
    ///
    /// Replace-on-conflict: a previous record under the same key is silently
    /// overwritten, with no separate insert-vs-update signal.
    pub fn upsert(
        conn: &Connection,
        owner: &PlayerId,
        name: &HomeName,
        location: &HomeLocation,
    ) -> Result<()> {
        conn.execute(
            "REPLACE INTO player_homes (uuid, home_name, world, x, y, z, yaw, pitch)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                owner.to_string(),
                name.as_str(),
                location.world,
                location.x,
                location.y,
                location.z,
                location.yaw,
                location.pitch,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Get the stored location for `(owner, name)`
    pub fn get(
        conn: &Connection,
        owner: &PlayerId,
        name: &HomeName,
    ) -> Result<Option<HomeLocation>> {
        let result = conn
            .query_row(
                "SELECT world, x, y, z, yaw, pitch FROM player_homes
                 WHERE uuid = ?1 AND home_name = ?2",
                rusqlite::params![owner.to_string(), name.as_str()],
                |row| {
                    Ok(HomeLocation {
                        world: row.get(0)?,
                        x: row.get(1)?,
                        y: row.get(2)?,
                        z: row.get(3)?,
                        yaw: row.get(4)?,
                        pitch: row.get(5)?,
                    })
                },
            )
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// List a player's home names, lexicographically ascending
    pub fn list_names(conn: &Connection, owner: &PlayerId) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare(
                "SELECT home_name FROM player_homes
                 WHERE uuid = ?1
                 ORDER BY home_name",
            )
            .map_err(from_rusqlite)?;

        let names = stmt
            .query_map([owner.to_string()], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(from_rusqlite)?;

        Ok(names)
    }

    /// List a player's full home records, lexicographically by name
    pub fn list(conn: &Connection, owner: &PlayerId) -> Result<Vec<Home>> {
        let mut stmt = conn
            .prepare(
                "SELECT home_name, world, x, y, z, yaw, pitch FROM player_homes
                 WHERE uuid = ?1
                 ORDER BY home_name",
            )
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([owner.to_string()], |row| {
                let name: String = row.get(0)?;
                let location = HomeLocation {
                    world: row.get(1)?,
                    x: row.get(2)?,
                    y: row.get(3)?,
                    z: row.get(4)?,
                    yaw: row.get(5)?,
                    pitch: row.get(6)?,
                };
                Ok((name, location))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        let mut homes = Vec::with_capacity(rows.len());
        for (name, location) in rows {
            // Stored names were normalized on the way in
            let name = HomeName::new(&name)
                .map_err(|e| e.with_op("list_homes").with_player(owner.to_string()))?;
            homes.push(Home::new(*owner, name, location));
        }

        Ok(homes)
    }

    /// Number of homes a player has
    pub fn count(conn: &Connection, owner: &PlayerId) -> Result<u32> {
        let count: u32 = conn
            .query_row(
                "SELECT COUNT(*) FROM player_homes WHERE uuid = ?1",
                [owner.to_string()],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;

        Ok(count)
    }

    /// Delete the home for `(owner, name)`
    ///
    /// Returns true iff a record existed and was removed.
    pub fn delete(conn: &Connection, owner: &PlayerId, name: &HomeName) -> Result<bool> {
        let affected = conn
            .execute(
                "DELETE FROM player_homes WHERE uuid = ?1 AND home_name = ?2",
                rusqlite::params![owner.to_string(), name.as_str()],
            )
            .map_err(from_rusqlite)?;

        Ok(affected > 0)
    }
}
