//! Host abstractions
//!
//! The engine needs exactly one answer from the game host: does a stored
//! world name still resolve to a loaded world? Teleport dispatch stays on
//! the host side; the engine only hands back destinations.

/// Resolves world names against the host's currently loaded worlds
pub trait WorldResolver {
    /// Whether `world` currently resolves to a loaded world
    fn world_exists(&self, world: &str) -> bool;
}

/// Fixed world list, for tests and offline tooling
///
/// `permissive()` resolves every name, which is what the admin CLI wants:
/// with no live host there is no world list to check against.
pub struct StaticWorlds {
    worlds: Vec<String>,
    permissive: bool,
}

impl StaticWorlds {
    /// Resolver that knows exactly the given worlds
    pub fn new<I, S>(worlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            worlds: worlds.into_iter().map(Into::into).collect(),
            permissive: false,
        }
    }

    /// Resolver that accepts every world name
    pub fn permissive() -> Self {
        Self {
            worlds: Vec::new(),
            permissive: true,
        }
    }
}

impl WorldResolver for StaticWorlds {
    fn world_exists(&self, world: &str) -> bool {
        self.permissive || self.worlds.iter().any(|w| w == world)
    }
}
