use glam::Vec3;

/// Externally visible camera pose.
///
/// Velocity is deliberately *not* here: it is private navigation state
/// owned by the [`MovementController`](super::MovementController),
/// which is the only writer of `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera position in world space.
    pub position: Vec3,
}

impl CameraState {
    /// Create a camera at the given position.
    #[must_use]
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Distance from the camera to a world-space point.
    #[must_use]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Source of the camera's look orientation.
///
/// Pointer-look capture is an external collaborator; the movement
/// controller only ever asks it for the current forward and up
/// vectors, once per tick.
pub trait OrientationSource {
    /// Current look direction. Need not be normalized; the controller
    /// normalizes after optionally zeroing the vertical component.
    fn forward(&self) -> Vec3;

    /// World up vector.
    fn up(&self) -> Vec3 {
        Vec3::Y
    }
}

/// An [`OrientationSource`] with fixed vectors.
///
/// Useful for tests and for hosts whose look controller exposes plain
/// vectors rather than a trait object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOrientation {
    /// Look direction.
    pub forward: Vec3,
    /// Up vector.
    pub up: Vec3,
}

impl FixedOrientation {
    /// Looking down -Z with +Y up.
    #[must_use]
    pub const fn looking_forward() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}

impl OrientationSource for FixedOrientation {
    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn up(&self) -> Vec3 {
        self.up
    }
}
