// Integration tests for the admin limit surface, including the cascading
// auto-deletion on decrease.

use hearth_core::errors::HearthErrorKind;
use hearth_core::model::{HomeLocation, PlayerId};
use hearth_engine::commands::admin::{
    decrease_limit, increase_limit, limit_info, visit_destination,
};
use hearth_engine::commands::homes::set_home;
use hearth_engine::StaticWorlds;
use hearth_store::Store;

fn setup_store(ceiling: u32) -> Store {
    Store::open_in_memory(ceiling).unwrap()
}

fn loc(world: &str) -> HomeLocation {
    HomeLocation::new(world, 12.0, 70.0, 8.0, 0.0, 0.0)
}

#[test]
fn test_increase_walks_to_ceiling_then_fails() {
    let store = setup_store(10);
    let target = PlayerId::random();

    for expected in 2..=10 {
        assert_eq!(increase_limit(&store, &target).unwrap(), expected);
    }

    let err = increase_limit(&store, &target).unwrap_err();
    assert_eq!(err.kind(), HearthErrorKind::LimitReached);
    assert_eq!(store.home_limit(&target), 10);
}

#[test]
fn test_decrease_at_minimum_fails() {
    let store = setup_store(10);
    let target = PlayerId::random();

    let err = decrease_limit(&store, &target).unwrap_err();
    assert_eq!(err.kind(), HearthErrorKind::InvalidLimit);
    assert_eq!(store.home_limit(&target), 1);
}

#[test]
fn test_decrease_without_excess_deletes_nothing() {
    let store = setup_store(10);
    let target = PlayerId::random();
    store.set_home_limit(&target, 4);

    set_home(&store, &target, "base", &loc("overworld")).unwrap();

    let result = decrease_limit(&store, &target).unwrap();
    assert_eq!(result.new_limit, 3);
    assert!(result.deleted.is_empty());
    assert_eq!(store.home_count(&target), 1);
}

#[test]
fn test_decrease_cascade_deletes_lexicographically_last() {
    // Scenario: homes [alpha, beta, gamma] under limit 3; decreasing to 1
    // must delete gamma then beta, leaving [alpha].
    let store = setup_store(10);
    let target = PlayerId::random();
    store.set_home_limit(&target, 3);

    for name in ["beta", "gamma", "alpha"] {
        set_home(&store, &target, name, &loc("overworld")).unwrap();
    }

    let first = decrease_limit(&store, &target).unwrap();
    assert_eq!(first.new_limit, 2);
    assert_eq!(first.deleted, vec!["gamma"]);

    let second = decrease_limit(&store, &target).unwrap();
    assert_eq!(second.new_limit, 1);
    assert_eq!(second.deleted, vec!["beta"]);

    assert_eq!(store.home_names(&target), vec!["alpha"]);
}

#[test]
fn test_decrease_cascade_in_one_step() {
    // Limit 3 → 2 with three homes: one deletion, the alphabetically last
    let store = setup_store(10);
    let target = PlayerId::random();
    store.set_home_limit(&target, 3);

    for name in ["alpha", "beta", "gamma"] {
        set_home(&store, &target, name, &loc("overworld")).unwrap();
    }

    let result = decrease_limit(&store, &target).unwrap();
    assert_eq!(result.deleted, vec!["gamma"]);
    assert_eq!(store.home_names(&target), vec!["alpha", "beta"]);
}

#[test]
fn test_limit_info_snapshot() {
    let store = setup_store(10);
    let target = PlayerId::random();
    store.set_home_limit(&target, 5);

    set_home(&store, &target, "den", &loc("overworld")).unwrap();
    set_home(&store, &target, "attic", &loc("nether")).unwrap();

    let info = limit_info(&store, &target);
    assert_eq!(info.count, 2);
    assert_eq!(info.limit, 5);
    assert_eq!(info.names, vec!["attic", "den"]);
}

#[test]
fn test_visit_follows_player_lookup_semantics() {
    let store = setup_store(10);
    let target = PlayerId::random();

    set_home(&store, &target, "base", &loc("old_world")).unwrap();

    let gone = StaticWorlds::new(["overworld"]);
    assert_eq!(visit_destination(&store, &gone, &target, "base"), None);

    let loaded = StaticWorlds::new(["old_world"]);
    let destination = visit_destination(&store, &loaded, &target, "Base").unwrap();
    assert_eq!(destination.world, "old_world");
}
