use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Movement integrator parameters.
///
/// Deployments vary the speed widely (50 for small rooms, 500 for
/// hangar-scale ones), so nothing here is hard-coded.
pub struct MovementOptions {
    /// Acceleration applied while a direction flag is held, in world
    /// units per second squared.
    pub move_speed: f32,
    /// Exponential velocity damping coefficient (per second).
    pub damping: f32,
    /// Whether the up/down flags move the camera vertically.
    pub vertical_movement: bool,
    /// Whether the forward vector's vertical component is zeroed
    /// before use, locking travel to the ground plane.
    pub ground_locked: bool,
}

impl Default for MovementOptions {
    fn default() -> Self {
        Self {
            move_speed: 100.0,
            damping: 10.0,
            vertical_movement: false,
            ground_locked: true,
        }
    }
}
