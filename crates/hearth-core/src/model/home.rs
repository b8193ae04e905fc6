use serde::{Deserialize, Serialize};

use super::location::HomeLocation;
use super::name::HomeName;
use super::player::PlayerId;

/// A named saved location owned by a player
///
/// The `(owner, name)` pair is the record's identity; the name is already
/// normalized by `HomeName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Home {
    pub owner: PlayerId,
    pub name: HomeName,
    pub location: HomeLocation,
}

impl Home {
    /// Create a home record
    pub fn new(owner: PlayerId, name: HomeName, location: HomeLocation) -> Self {
        Self {
            owner,
            name,
            location,
        }
    }
}
