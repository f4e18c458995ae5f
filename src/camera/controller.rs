//! Damped first-person movement.
//!
//! Six boolean direction flags accumulate into a velocity that decays
//! exponentially when input stops, giving smooth deceleration. Each
//! render tick integrates the velocity into the camera position,
//! relative to the look orientation supplied by the host.

use glam::Vec3;

use super::core::{CameraState, OrientationSource};
use crate::options::MovementOptions;

/// One of the six movement directions a key can hold active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Toward the look direction.
    Forward,
    /// Away from the look direction.
    Backward,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Along the up vector (vertical movement only).
    Up,
    /// Against the up vector (vertical movement only).
    Down,
}

/// Held state of the six direction flags.
///
/// Writes are idempotent: auto-repeated key-down events just set an
/// already-set flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DirectionFlags {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

impl DirectionFlags {
    fn any_horizontal(self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    fn any_vertical(self) -> bool {
        self.up || self.down
    }
}

/// Damped-velocity movement integrator.
///
/// Owns the private velocity state and is the sole writer of
/// [`CameraState::position`]. Orientation is read from the external
/// [`OrientationSource`] once per tick.
#[derive(Debug, Clone)]
pub struct MovementController {
    options: MovementOptions,
    flags: DirectionFlags,
    velocity: Vec3,
}

impl MovementController {
    /// Create a controller with the given movement options.
    #[must_use]
    pub fn new(options: MovementOptions) -> Self {
        Self {
            options,
            flags: DirectionFlags::default(),
            velocity: Vec3::ZERO,
        }
    }

    /// Current movement options.
    #[must_use]
    pub fn options(&self) -> &MovementOptions {
        &self.options
    }

    /// Replace the movement options (e.g. after a preset load).
    pub fn set_options(&mut self, options: MovementOptions) {
        self.options = options;
    }

    /// Current velocity (read-only; external writes would break the
    /// damping invariants).
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Set or clear a direction flag. Idempotent under repeated
    /// identical events.
    pub fn set_direction(&mut self, direction: MoveDirection, active: bool) {
        match direction {
            MoveDirection::Forward => self.flags.forward = active,
            MoveDirection::Backward => self.flags.backward = active,
            MoveDirection::Left => self.flags.left = active,
            MoveDirection::Right => self.flags.right = active,
            MoveDirection::Up => self.flags.up = active,
            MoveDirection::Down => self.flags.down = active,
        }
    }

    /// Zero the velocity and release all flags (teleport entry state).
    pub fn reset(&mut self) {
        self.flags = DirectionFlags::default();
        self.velocity = Vec3::ZERO;
    }

    /// Integrate one frame of movement into the camera position.
    ///
    /// Order matters and matches the damping model: decay first, then
    /// accumulate input, then apply orientation-relative displacement.
    /// Non-finite or non-positive `dt` is a no-op, so a stalled host
    /// clock can never inject NaN into the camera.
    pub fn tick(
        &mut self,
        dt: f32,
        orientation: &dyn OrientationSource,
        camera: &mut CameraState,
    ) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        // Exponential damping per axis in use. The factor is clamped
        // at zero so an oversized dt stops the camera instead of
        // reversing it with a larger magnitude.
        let decay = (1.0 - self.options.damping * dt).max(0.0);
        self.velocity.x *= decay;
        self.velocity.z *= decay;
        if self.options.vertical_movement {
            self.velocity.y *= decay;
        }

        // normalize_or_zero: all flags released yields exactly zero,
        // never NaN from normalizing a zero-length vector.
        let dir = Vec3::new(
            (i32::from(self.flags.right) - i32::from(self.flags.left)) as f32,
            (i32::from(self.flags.up) - i32::from(self.flags.down)) as f32,
            (i32::from(self.flags.forward) - i32::from(self.flags.backward))
                as f32,
        )
        .normalize_or_zero();

        let speed = self.options.move_speed;
        if self.flags.forward || self.flags.backward {
            self.velocity.z -= dir.z * speed * dt;
        }
        if self.flags.left || self.flags.right {
            self.velocity.x -= dir.x * speed * dt;
        }
        if self.options.vertical_movement && self.flags.any_vertical() {
            self.velocity.y -= dir.y * speed * dt;
        }

        let up = orientation.up();
        let mut forward = orientation.forward();
        if self.options.ground_locked {
            forward.y = 0.0;
        }
        let forward = forward.normalize_or_zero();
        let right = up.cross(forward).normalize_or_zero();

        camera.position += forward * (-self.velocity.z * dt)
            + right * (self.velocity.x * dt);
        if self.options.vertical_movement {
            camera.position += up * (self.velocity.y * dt);
        }
    }
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(MovementOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::FixedOrientation;

    fn controller() -> MovementController {
        MovementController::new(MovementOptions {
            move_speed: 100.0,
            damping: 10.0,
            vertical_movement: false,
            ground_locked: true,
        })
    }

    #[test]
    fn forward_tick_reaches_reference_velocity() {
        // damping 10, speed 100, dt 0.1, v0 = 0, forward held:
        // one tick must land at v.z == -10.
        let mut ctl = controller();
        let mut cam = CameraState::default();
        ctl.set_direction(MoveDirection::Forward, true);
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        assert_eq!(ctl.velocity().z, -10.0);
        assert_eq!(ctl.velocity().x, 0.0);
    }

    #[test]
    fn forward_moves_along_look_direction() {
        let mut ctl = controller();
        let mut cam = CameraState::default();
        ctl.set_direction(MoveDirection::Forward, true);
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        // Looking down -Z: forward motion decreases z, leaves x alone.
        assert!(cam.position.z < 0.0);
        assert_eq!(cam.position.x, 0.0);
    }

    #[test]
    fn strafe_right_moves_right_of_look_direction() {
        let mut ctl = controller();
        let mut cam = CameraState::default();
        ctl.set_direction(MoveDirection::Right, true);
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        // Looking down -Z with +Y up, "right" is +X.
        assert!(cam.position.x > 0.0);
        assert_eq!(cam.position.z, 0.0);
    }

    #[test]
    fn damping_is_monotonically_non_increasing() {
        let mut ctl = controller();
        let mut cam = CameraState::default();
        ctl.set_direction(MoveDirection::Forward, true);
        ctl.tick(0.016, &FixedOrientation::looking_forward(), &mut cam);
        ctl.set_direction(MoveDirection::Forward, false);

        let mut last = ctl.velocity().length();
        for dt in [0.001, 0.016, 0.05, 0.1, 0.5, 2.0] {
            ctl.tick(dt, &FixedOrientation::looking_forward(), &mut cam);
            let mag = ctl.velocity().length();
            assert!(mag <= last, "|v| grew under zero input at dt {dt}");
            assert!(mag.is_finite());
            last = mag;
        }
    }

    #[test]
    fn released_flags_give_exact_zero_direction() {
        let mut ctl = controller();
        let mut cam = CameraState::default();
        // No flags held: velocity must stay exactly zero, never NaN.
        for _ in 0..10 {
            ctl.tick(0.016, &FixedOrientation::looking_forward(), &mut cam);
        }
        assert_eq!(ctl.velocity(), Vec3::ZERO);
        assert_eq!(cam.position, Vec3::ZERO);
    }

    #[test]
    fn opposing_flags_cancel() {
        let mut ctl = controller();
        let mut cam = CameraState::default();
        ctl.set_direction(MoveDirection::Forward, true);
        ctl.set_direction(MoveDirection::Backward, true);
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        assert_eq!(ctl.velocity(), Vec3::ZERO);
    }

    #[test]
    fn flag_writes_are_idempotent() {
        let mut ctl = controller();
        ctl.set_direction(MoveDirection::Left, true);
        ctl.set_direction(MoveDirection::Left, true);
        let mut cam = CameraState::default();
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        let once = ctl.velocity();
        assert!(once.x > 0.0 || once.x < 0.0);
    }

    #[test]
    fn vertical_axis_requires_opt_in() {
        let mut ctl = controller();
        let mut cam = CameraState::default();
        ctl.set_direction(MoveDirection::Up, true);
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        assert_eq!(ctl.velocity().y, 0.0);
        assert_eq!(cam.position.y, 0.0);

        let mut opts = ctl.options().clone();
        opts.vertical_movement = true;
        ctl.set_options(opts);
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        assert!(cam.position.y > 0.0);
    }

    #[test]
    fn ground_lock_zeroes_vertical_drift() {
        let mut ctl = controller();
        let mut cam = CameraState::default();
        ctl.set_direction(MoveDirection::Forward, true);
        let tilted = FixedOrientation {
            forward: Vec3::new(0.0, -0.5, -1.0),
            up: Vec3::Y,
        };
        ctl.tick(0.1, &tilted, &mut cam);
        assert_eq!(cam.position.y, 0.0);
        assert!(cam.position.z < 0.0);
    }

    #[test]
    fn hostile_dt_is_a_no_op() {
        let mut ctl = controller();
        let mut cam = CameraState::new(Vec3::new(1.0, 2.0, 3.0));
        ctl.set_direction(MoveDirection::Forward, true);
        for dt in [f32::NAN, f32::INFINITY, -1.0, 0.0] {
            ctl.tick(dt, &FixedOrientation::looking_forward(), &mut cam);
        }
        assert_eq!(cam.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(ctl.velocity(), Vec3::ZERO);
    }

    #[test]
    fn reset_clears_velocity_and_flags() {
        let mut ctl = controller();
        let mut cam = CameraState::default();
        ctl.set_direction(MoveDirection::Forward, true);
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        ctl.reset();
        assert_eq!(ctl.velocity(), Vec3::ZERO);

        let before = cam.position;
        ctl.tick(0.1, &FixedOrientation::looking_forward(), &mut cam);
        assert_eq!(cam.position, before);
    }
}
