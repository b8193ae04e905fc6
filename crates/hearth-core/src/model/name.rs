use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{HearthError, HearthErrorKind, Result};

/// Maximum length of a home name in characters
pub const MAX_HOME_NAME_LEN: usize = 30;

/// Validated, case-normalized home name
///
/// Names are unique per player. The allowed charset is `[A-Za-z0-9_-]` with a
/// maximum of 30 characters. Construction lower-cases the name, so the
/// `(player, name)` key is case-insensitive in code as well as through the
/// schema's NOCASE collation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct HomeName(String);

impl HomeName {
    /// Validate and normalize a raw name
    ///
    /// # Errors
    /// * `InvalidName` - empty, longer than 30 chars, or disallowed characters
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(HearthError::new(HearthErrorKind::InvalidName)
                .with_message("home name cannot be empty"));
        }
        if raw.chars().count() > MAX_HOME_NAME_LEN {
            return Err(HearthError::new(HearthErrorKind::InvalidName)
                .with_home(raw)
                .with_message(format!(
                    "home name exceeds {} characters",
                    MAX_HOME_NAME_LEN
                )));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(HearthError::new(HearthErrorKind::InvalidName)
                .with_home(raw)
                .with_message("home name may contain only letters, numbers, underscores, or hyphens"));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// The normalized (lower-case) name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HomeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HomeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for HomeName {
    type Err = HearthError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for HomeName {
    type Error = HearthError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<HomeName> for String {
    fn from(name: HomeName) -> Self {
        name.0
    }
}
