//! Ceiling-aware constraint management for `player_home_limits`
//!
//! The limit table carries `CHECK(max_homes >= 1 AND max_homes <= <ceiling>)`
//! where the ceiling is a deployment config value, so its schema cannot live
//! in a static embedded migration. Instead, every startup runs
//! [`ensure_limit_ceiling`]: probe whether the persisted constraint matches
//! the ceiling in force, and rebuild the table under the new bound when it
//! does not.
//!
//! SQLite has no ALTER for CHECK constraints, so the rebuild is a
//! copy-and-swap: create a replacement table, copy rows while clamping each
//! value to the new ceiling, drop the original, rename. Rows are never lost;
//! values are only clamped downward.

use rusqlite::{Connection, OptionalExtension};

use crate::errors::{from_rusqlite, migration_error, Result};

/// Sentinel key used for the constraint probe.
///
/// Real keys are hyphenated UUIDs, which this is not, so the probe can never
/// collide with a player row.
const PROBE_SENTINEL: &str = "ceiling-probe-sentinel";

/// Guarantee that the persisted range constraint matches `ceiling`.
///
/// Idempotent and safe to run on every startup. When the table already
/// exists under a different bound, rebuilds it and clamps each stored value
/// to `min(value, ceiling)`.
pub fn ensure_limit_ceiling(conn: &mut Connection, ceiling: u32) -> Result<()> {
    create_limits_table(conn, ceiling)?;

    if probe_constraint_matches(conn, ceiling)? {
        tracing::debug!(ceiling, "limit constraint already matches ceiling");
        return Ok(());
    }

    rebuild_limits_table(conn, ceiling)
}

fn limits_columns_sql(ceiling: u32) -> String {
    format!(
        "(
            uuid TEXT PRIMARY KEY NOT NULL,
            max_homes INTEGER NOT NULL DEFAULT 1
                CHECK(max_homes >= 1 AND max_homes <= {})
        )",
        ceiling
    )
}

fn create_limits_table(conn: &Connection, ceiling: u32) -> Result<()> {
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS player_home_limits {}",
        limits_columns_sql(ceiling)
    );
    conn.execute(&sql, []).map_err(from_rusqlite)?;
    Ok(())
}

/// Round-trip probe of the persisted CHECK constraint.
///
/// Two sentinel writes pin the constraint from both sides: the exact ceiling
/// value must be accepted and read back unchanged, and `ceiling + 1` must be
/// rejected. `INSERT OR IGNORE` swallows the CHECK violation, so a rejected
/// write shows up as an absent row rather than an error. Sentinels are
/// removed before returning.
fn probe_constraint_matches(conn: &Connection, ceiling: u32) -> Result<bool> {
    let accepts_ceiling = probe_value_accepted(conn, i64::from(ceiling))?;
    let accepts_over = probe_value_accepted(conn, i64::from(ceiling) + 1)?;

    Ok(accepts_ceiling && !accepts_over)
}

fn probe_value_accepted(conn: &Connection, value: i64) -> Result<bool> {
    conn.execute(
        "INSERT OR IGNORE INTO player_home_limits (uuid, max_homes) VALUES (?1, ?2)",
        rusqlite::params![PROBE_SENTINEL, value],
    )
    .map_err(from_rusqlite)?;

    let stored: Option<i64> = conn
        .query_row(
            "SELECT max_homes FROM player_home_limits WHERE uuid = ?1",
            [PROBE_SENTINEL],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    conn.execute(
        "DELETE FROM player_home_limits WHERE uuid = ?1",
        [PROBE_SENTINEL],
    )
    .map_err(from_rusqlite)?;

    Ok(stored == Some(value))
}

/// Copy-and-swap rebuild under the new ceiling.
///
/// Runs as one transaction: create replacement, copy with clamping, drop
/// original, rename replacement into place.
fn rebuild_limits_table(conn: &mut Connection, ceiling: u32) -> Result<()> {
    tracing::debug!(ceiling, "rebuilding player_home_limits under new ceiling");

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let batch = format!(
        "CREATE TABLE player_home_limits_new {};
         INSERT INTO player_home_limits_new (uuid, max_homes)
             SELECT uuid, MIN(max_homes, {}) FROM player_home_limits;
         DROP TABLE player_home_limits;
         ALTER TABLE player_home_limits_new RENAME TO player_home_limits;",
        limits_columns_sql(ceiling),
        ceiling
    );
    tx.execute_batch(&batch)
        .map_err(|e| migration_error("player_home_limits_ceiling", &e.to_string()))?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(ceiling, "rebuilt player_home_limits");

    Ok(())
}
