//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!. The
//! `player_home_limits` table is absent here on purpose: its CHECK constraint
//! embeds the configured ceiling and is managed by the `ceiling` module.

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_player_homes",
        sql: include_str!("../../migrations/001_player_homes.sql"),
    }]
}
