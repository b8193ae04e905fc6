use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{HearthError, HearthErrorKind};

/// Stable player identity
///
/// Ties home and limit records to a player across sessions. Persisted as the
/// canonical hyphenated UUID text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random identity (test and tooling convenience)
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PlayerId {
    type Err = HearthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s).map_err(|e| {
            HearthError::new(HearthErrorKind::InvalidInput)
                .with_op("parse_player_id")
                .with_message(format!("not a valid UUID: {}", e))
        })?;
        Ok(Self(uuid))
    }
}
