// Integration tests for limit storage and the ceiling migration:
// implicit defaults, range enforcement, increase-to-ceiling, and the
// clamp-without-losing-rows rebuild property.

use hearth_core::model::PlayerId;
use hearth_store::Store;
use proptest::prelude::*;
use rusqlite::Connection;

#[test]
fn test_limit_scenario_increase_to_ceiling() {
    // Ceiling 10; player with no limit row starts at 1; nine increases reach
    // the ceiling; a tenth fails and the limit stays put.
    let store = Store::open_in_memory(10).unwrap();
    let player = PlayerId::random();

    assert_eq!(store.home_limit(&player), 1);

    for expected in 2..=10 {
        assert!(store.increase_home_limit(&player));
        assert_eq!(store.home_limit(&player), expected);
    }

    assert!(!store.increase_home_limit(&player));
    assert_eq!(store.home_limit(&player), 10);
}

#[test]
fn test_set_limit_out_of_range_does_not_mutate() {
    let store = Store::open_in_memory(10).unwrap();
    let player = PlayerId::random();

    assert!(store.set_home_limit(&player, 5));

    assert!(!store.set_home_limit(&player, 0));
    assert!(!store.set_home_limit(&player, 11));
    assert_eq!(store.home_limit(&player), 5);
}

#[test]
fn test_reopen_with_lower_ceiling_clamps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homes.db");

    let players: Vec<PlayerId> = (0..4).map(|_| PlayerId::random()).collect();

    {
        let store = Store::open(&path, 20).unwrap();
        for (player, limit) in players.iter().zip([20, 15, 8, 3]) {
            assert!(store.set_home_limit(player, limit));
        }
    }

    // Restart with a tightened ceiling
    let store = Store::open(&path, 10).unwrap();

    let clamped: Vec<u32> = players.iter().map(|p| store.home_limit(p)).collect();
    assert_eq!(clamped, vec![10, 10, 8, 3]);
}

#[test]
fn test_reopen_with_higher_ceiling_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homes.db");
    let player = PlayerId::random();

    {
        let store = Store::open(&path, 5).unwrap();
        assert!(store.set_home_limit(&player, 5));
        // 6 is above the old ceiling
        assert!(!store.set_home_limit(&player, 6));
    }

    let store = Store::open(&path, 12).unwrap();
    assert_eq!(store.home_limit(&player), 5);
    assert!(store.set_home_limit(&player, 12));
}

#[test]
fn test_migration_keeps_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homes.db");

    {
        let store = Store::open(&path, 30).unwrap();
        for i in 1..=25 {
            assert!(store.set_home_limit(&PlayerId::random(), i));
        }
    }

    {
        let _store = Store::open(&path, 7).unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM player_home_limits", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 25, "migration must not lose rows");

    let over: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM player_home_limits WHERE max_homes > 7",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(over, 0, "every value must be clamped to the new ceiling");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    // Clamp property: for rows valid under the old ceiling, migrating to a
    // smaller ceiling C maps each value v to min(v, C) and keeps every row.
    #[test]
    fn prop_rebuild_clamps_to_min(
        values in proptest::collection::vec(1u32..=30, 1..12),
        new_ceiling in 1u32..=29,
    ) {
        let mut conn = Connection::open_in_memory().unwrap();
        hearth_store::migrations::apply_migrations(&mut conn).unwrap();
        hearth_store::migrations::ceiling::ensure_limit_ceiling(&mut conn, 30).unwrap();

        let players: Vec<PlayerId> = values.iter().map(|_| PlayerId::random()).collect();
        for (player, value) in players.iter().zip(&values) {
            conn.execute(
                "INSERT INTO player_home_limits (uuid, max_homes) VALUES (?1, ?2)",
                rusqlite::params![player.to_string(), value],
            )
            .unwrap();
        }

        hearth_store::migrations::ceiling::ensure_limit_ceiling(&mut conn, new_ceiling).unwrap();

        for (player, value) in players.iter().zip(&values) {
            let stored: u32 = conn
                .query_row(
                    "SELECT max_homes FROM player_home_limits WHERE uuid = ?1",
                    [player.to_string()],
                    |row| row.get(0),
                )
                .unwrap();
            prop_assert_eq!(stored, (*value).min(new_ceiling));
        }

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM player_home_limits", [], |row| row.get(0))
            .unwrap();
        prop_assert_eq!(count as usize, values.len());
    }
}
