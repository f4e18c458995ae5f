//! First-person camera state and damped movement integration.
//!
//! The camera *pose* (position) lives here; *orientation* (yaw/pitch)
//! is owned by an external look-controller and consumed through the
//! [`OrientationSource`] trait each tick.

/// Damped-velocity movement controller driven by direction flags.
pub mod controller;
/// Camera position state and the orientation-source seam.
pub mod core;

pub use controller::{MoveDirection, MovementController};
pub use core::{CameraState, FixedOrientation, OrientationSource};
