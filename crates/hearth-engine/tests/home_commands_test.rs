// Integration tests for the player-facing command semantics:
// limit enforcement on set-home, world resolution on lookup, listing.

use hearth_core::errors::HearthErrorKind;
use hearth_core::model::{HomeLocation, PlayerId};
use hearth_engine::commands::homes::{
    delete_home, home_destination, list_homes, set_home, SetHomeOutcome, DEFAULT_HOME_NAME,
};
use hearth_engine::StaticWorlds;
use hearth_store::Store;

fn setup_store(ceiling: u32) -> Store {
    Store::open_in_memory(ceiling).unwrap()
}

fn loc(world: &str) -> HomeLocation {
    HomeLocation::new(world, 100.5, 64.0, -220.25, 45.0, 10.0)
}

#[test]
fn test_set_home_and_teleport_round_trip() {
    let store = setup_store(10);
    let player = PlayerId::random();
    let resolver = StaticWorlds::new(["overworld"]);

    let outcome = set_home(&store, &player, DEFAULT_HOME_NAME, &loc("overworld")).unwrap();
    assert_eq!(outcome, SetHomeOutcome::Created);

    let destination = home_destination(&store, &resolver, &player, "home");
    assert_eq!(destination, Some(loc("overworld")));
}

#[test]
fn test_set_home_rejects_invalid_name() {
    let store = setup_store(10);
    let player = PlayerId::random();

    let err = set_home(&store, &player, "not a name!", &loc("overworld")).unwrap_err();
    assert_eq!(err.kind(), HearthErrorKind::InvalidName);
    assert_eq!(store.home_count(&player), 0);
}

#[test]
fn test_set_home_enforces_limit_for_new_names() {
    // Default limit is 1: the first home saves, a second name is refused
    let store = setup_store(10);
    let player = PlayerId::random();

    set_home(&store, &player, "base", &loc("overworld")).unwrap();

    let err = set_home(&store, &player, "annex", &loc("overworld")).unwrap_err();
    assert_eq!(err.kind(), HearthErrorKind::LimitReached);
    assert_eq!(store.home_count(&player), 1);
}

#[test]
fn test_set_home_overwrite_is_exempt_from_limit() {
    let store = setup_store(10);
    let player = PlayerId::random();

    set_home(&store, &player, "base", &loc("overworld")).unwrap();

    // At the limit, but moving an existing home is always allowed,
    // in any casing
    let outcome = set_home(&store, &player, "Base", &loc("nether")).unwrap();
    assert_eq!(outcome, SetHomeOutcome::Updated);
    assert_eq!(store.home_count(&player), 1);

    let resolver = StaticWorlds::permissive();
    let destination = home_destination(&store, &resolver, &player, "base").unwrap();
    assert_eq!(destination.world, "nether");
}

#[test]
fn test_lookup_misses_when_world_gone() {
    let store = setup_store(10);
    let player = PlayerId::random();

    set_home(&store, &player, "base", &loc("old_world")).unwrap();

    // Record still exists, but the host no longer loads that world
    let resolver = StaticWorlds::new(["overworld"]);
    assert_eq!(home_destination(&store, &resolver, &player, "base"), None);

    // A resolver that knows the world still finds it
    let resolver = StaticWorlds::new(["old_world"]);
    assert!(home_destination(&store, &resolver, &player, "base").is_some());
}

#[test]
fn test_lookup_of_unknown_home_misses() {
    let store = setup_store(10);
    let player = PlayerId::random();
    let resolver = StaticWorlds::permissive();

    assert_eq!(home_destination(&store, &resolver, &player, "nowhere"), None);
}

#[test]
fn test_delete_home_semantics() {
    let store = setup_store(10);
    let player = PlayerId::random();

    set_home(&store, &player, "base", &loc("overworld")).unwrap();

    assert!(delete_home(&store, &player, "base"));
    assert!(!delete_home(&store, &player, "base"));
    assert!(!delete_home(&store, &player, "not a name!"));
}

#[test]
fn test_list_homes_reports_count_and_limit() {
    let store = setup_store(10);
    let player = PlayerId::random();
    store.set_home_limit(&player, 5);

    for name in ["gamma", "alpha", "beta"] {
        set_home(&store, &player, name, &loc("overworld")).unwrap();
    }

    let listing = list_homes(&store, &player);
    assert_eq!(listing.names, vec!["alpha", "beta", "gamma"]);
    assert_eq!(listing.count, 3);
    assert_eq!(listing.limit, 5);
}
