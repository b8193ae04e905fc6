//! Player-facing home commands
//!
//! set-home, teleport lookup, delete, and listing. Raw names from the
//! command line are validated here, before they reach storage; lookups of a
//! name that could never have been stored simply miss.

use hearth_core::errors::{HearthError, HearthErrorKind, Result};
use hearth_core::model::{HomeLocation, HomeName, PlayerId};
use hearth_core::{log_op_end, log_op_error, log_op_start};
use hearth_store::Store;

use crate::host::WorldResolver;

/// Name used when the player does not give one
pub const DEFAULT_HOME_NAME: &str = "home";

/// Whether a set-home created a new record or replaced an existing one
///
/// The store's upsert gives no insert-vs-update signal; this distinction is
/// computed up front because an overwrite is exempt from the limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetHomeOutcome {
    Created,
    Updated,
}

/// Save or move a home at the given location
///
/// An overwrite of an existing name is always allowed; a new name requires
/// the player to be under their limit.
///
/// # Errors
/// * `InvalidName` - name fails validation
/// * `LimitReached` - player is at their home limit
/// * `Persistence` - the store could not save the record
pub fn set_home(
    store: &Store,
    owner: &PlayerId,
    raw_name: &str,
    location: &HomeLocation,
) -> Result<SetHomeOutcome> {
    log_op_start!("set_home", player_id = %owner, home_name = raw_name);
    let start = std::time::Instant::now();

    let result = set_home_impl(store, owner, raw_name, location).map_err(|e| {
        log_op_error!(
            "set_home",
            e,
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "set_home",
        duration_ms = start.elapsed().as_millis() as u64,
        outcome = ?result
    );

    Ok(result)
}

fn set_home_impl(
    store: &Store,
    owner: &PlayerId,
    raw_name: &str,
    location: &HomeLocation,
) -> Result<SetHomeOutcome> {
    let name = HomeName::new(raw_name)?;

    let updating = store.home_location(owner, &name).is_some();
    if !updating {
        let count = store.home_count(owner);
        let limit = store.home_limit(owner);
        if count >= limit {
            return Err(HearthError::new(HearthErrorKind::LimitReached)
                .with_op("set_home")
                .with_player(owner.to_string())
                .with_message(format!("home limit of {} reached", limit)));
        }
    }

    if !store.upsert_home(owner, &name, location) {
        return Err(HearthError::new(HearthErrorKind::Persistence)
            .with_op("set_home")
            .with_player(owner.to_string())
            .with_home(name.as_str())
            .with_message("store rejected the write"));
    }

    Ok(if updating {
        SetHomeOutcome::Updated
    } else {
        SetHomeOutcome::Created
    })
}

/// Resolve the destination for a home teleport
///
/// Not-found covers both an absent record and a stored world the host no
/// longer resolves; the caller cannot tell them apart, matching the store
/// contract. The actual teleport is dispatched by the host afterwards.
pub fn home_destination(
    store: &Store,
    resolver: &dyn WorldResolver,
    owner: &PlayerId,
    raw_name: &str,
) -> Option<HomeLocation> {
    let name = HomeName::new(raw_name).ok()?;
    let location = store.home_location(owner, &name)?;

    if !resolver.world_exists(&location.world) {
        tracing::warn!(
            player_id = %owner,
            home_name = name.as_str(),
            world = %location.world,
            "world for home no longer resolves"
        );
        return None;
    }

    Some(location)
}

/// Delete a home; true iff it existed and was removed
pub fn delete_home(store: &Store, owner: &PlayerId, raw_name: &str) -> bool {
    let Ok(name) = HomeName::new(raw_name) else {
        return false;
    };
    store.delete_home(owner, &name)
}

/// A player's homes alongside their count and limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeListing {
    /// Home names, lexicographically ascending
    pub names: Vec<String>,
    pub count: u32,
    pub limit: u32,
}

/// List a player's homes with their count and limit
pub fn list_homes(store: &Store, owner: &PlayerId) -> HomeListing {
    let names = store.home_names(owner);
    let count = names.len() as u32;
    let limit = store.home_limit(owner);

    HomeListing {
        names,
        count,
        limit,
    }
}
