//! Admin limit commands
//!
//! increase/decrease/inspect a player's limit, and look up another player's
//! home for an admin visit. Decreasing below the current home count cascades:
//! the excess homes are auto-deleted, taking the last entries of the
//! lexicographically-sorted name list first. The store's deterministic
//! ordering guarantee exists to make that choice reproducible.

use hearth_core::errors::{HearthError, HearthErrorKind, Result};
use hearth_core::model::{HomeLocation, HomeName, PlayerId};
use hearth_core::{log_op_end, log_op_error, log_op_start};
use hearth_store::Store;

use crate::commands::homes::home_destination;
use crate::host::WorldResolver;

/// Raise a player's limit by one
///
/// # Errors
/// * `LimitReached` - player is already at the global ceiling
/// * `Persistence` - the store could not save the new limit
pub fn increase_limit(store: &Store, target: &PlayerId) -> Result<u32> {
    let current = store.home_limit(target);
    if current >= store.ceiling() {
        return Err(HearthError::new(HearthErrorKind::LimitReached)
            .with_op("increase_limit")
            .with_player(target.to_string())
            .with_message(format!(
                "already at the maximum home limit ({})",
                store.ceiling()
            )));
    }

    if !store.set_home_limit(target, current + 1) {
        return Err(HearthError::new(HearthErrorKind::Persistence)
            .with_op("increase_limit")
            .with_player(target.to_string())
            .with_message("store rejected the write"));
    }

    Ok(current + 1)
}

/// Result of a limit decrease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitDecrease {
    pub new_limit: u32,
    /// Homes auto-deleted to fit the new limit, in deletion order
    pub deleted: Vec<String>,
}

/// Lower a player's limit by one, auto-deleting excess homes
///
/// When the player holds more homes than the new limit allows, the excess
/// N = count − new_limit homes are deleted: the alphabetically last N names,
/// deleted last-first.
///
/// # Errors
/// * `InvalidLimit` - player is already at the minimum limit (1)
/// * `Persistence` - the store could not save the new limit
pub fn decrease_limit(store: &Store, target: &PlayerId) -> Result<LimitDecrease> {
    log_op_start!("decrease_limit", player_id = %target);
    let start = std::time::Instant::now();

    let result = decrease_limit_impl(store, target).map_err(|e| {
        log_op_error!(
            "decrease_limit",
            e,
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "decrease_limit",
        duration_ms = start.elapsed().as_millis() as u64,
        new_limit = result.new_limit,
        deleted = result.deleted.len()
    );

    Ok(result)
}

fn decrease_limit_impl(store: &Store, target: &PlayerId) -> Result<LimitDecrease> {
    let current = store.home_limit(target);
    if current <= 1 {
        return Err(HearthError::new(HearthErrorKind::InvalidLimit)
            .with_op("decrease_limit")
            .with_player(target.to_string())
            .with_message("already at the minimum home limit (1)"));
    }

    let new_limit = current - 1;
    let count = store.home_count(target);

    let mut deleted = Vec::new();
    if count > new_limit {
        let names = store.home_names(target);
        let excess = (count - new_limit) as usize;

        for raw in names.iter().rev().take(excess) {
            // Stored names were normalized on the way in
            let name = HomeName::new(raw)
                .map_err(|e| e.with_op("decrease_limit").with_player(target.to_string()))?;
            if store.delete_home(target, &name) {
                deleted.push(raw.clone());
            }
        }
    }

    if !store.set_home_limit(target, new_limit) {
        return Err(HearthError::new(HearthErrorKind::Persistence)
            .with_op("decrease_limit")
            .with_player(target.to_string())
            .with_message("store rejected the write"));
    }

    Ok(LimitDecrease { new_limit, deleted })
}

/// A player's limit standing, for the admin inspect command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitInfo {
    pub count: u32,
    pub limit: u32,
    /// Home names, lexicographically ascending
    pub names: Vec<String>,
}

/// Inspect a player's count, limit, and home names
pub fn limit_info(store: &Store, target: &PlayerId) -> LimitInfo {
    let names = store.home_names(target);
    let count = names.len() as u32;
    let limit = store.home_limit(target);

    LimitInfo {
        count,
        limit,
        names,
    }
}

/// Resolve the destination for an admin visit to another player's home
///
/// Same not-found semantics as the player lookup.
pub fn visit_destination(
    store: &Store,
    resolver: &dyn WorldResolver,
    target: &PlayerId,
    raw_name: &str,
) -> Option<HomeLocation> {
    home_destination(store, resolver, target, raw_name)
}
