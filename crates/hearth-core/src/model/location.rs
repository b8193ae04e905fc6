use serde::{Deserialize, Serialize};

/// A saved position in the game world
///
/// World name plus coordinates and view orientation. The world name is opaque
/// here; whether it resolves to a loaded world is a host concern decided at
/// lookup time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeLocation {
    /// Name of the world this location lies in
    pub world: String,

    pub x: f64,
    pub y: f64,
    pub z: f64,

    /// Horizontal view angle in degrees
    pub yaw: f32,
    /// Vertical view angle in degrees
    pub pitch: f32,
}

impl HomeLocation {
    /// Create a location with the given world, coordinates, and orientation
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64, yaw: f32, pitch: f32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw,
            pitch,
        }
    }
}
