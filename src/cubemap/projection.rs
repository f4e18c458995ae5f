//! Pixel-to-world projection onto the cube surface, and its inverse.
//!
//! Markers are recorded as 2D pixel coordinates against a source face
//! image. [`project`] maps such a coordinate onto the inner surface of
//! a cube of the given size; [`unproject`] recovers the face and pixel
//! coordinate from a surface point, which is what the test suite and
//! authoring tools use for validation.

use glam::Vec3;

use super::CubeFace;
use crate::error::PanoNavError;

/// Map a pixel coordinate on a face image to a point on the cube
/// surface.
///
/// Image-space `y` grows downward while world `y` grows upward, so the
/// vertical axis is flipped. Exactly one coordinate of the result is
/// pinned to `±cube_size / 2`; the other two come from the pixel
/// position.
///
/// # Errors
///
/// [`PanoNavError::InvalidProjection`] if either pixel coordinate is
/// non-finite, or if `image_size` or `cube_size` is non-finite or not
/// strictly positive. A bad marker is rejected here rather than placed
/// at the origin.
pub fn project(
    face: CubeFace,
    pixel_x: f32,
    pixel_y: f32,
    image_size: f32,
    cube_size: f32,
) -> Result<Vec3, PanoNavError> {
    if !pixel_x.is_finite() || !pixel_y.is_finite() {
        return Err(PanoNavError::InvalidProjection(format!(
            "non-finite pixel coordinate ({pixel_x}, {pixel_y})"
        )));
    }
    if !image_size.is_finite() || image_size <= 0.0 {
        return Err(PanoNavError::InvalidProjection(format!(
            "image size {image_size} must be finite and positive"
        )));
    }
    if !cube_size.is_finite() || cube_size <= 0.0 {
        return Err(PanoNavError::InvalidProjection(format!(
            "cube size {cube_size} must be finite and positive"
        )));
    }

    let half = cube_size / 2.0;
    let px = (pixel_x / image_size) * cube_size - half;
    let py = half - (pixel_y / image_size) * cube_size;

    let world = match face {
        CubeFace::Top => Vec3::new(px, half, -py),
        CubeFace::Back => Vec3::new(half, py, -px),
        CubeFace::Right => Vec3::new(px, py, half),
        CubeFace::Left => Vec3::new(-px, py, -half),
        CubeFace::Front => Vec3::new(-half, py, px),
        CubeFace::Bottom => Vec3::new(-px, -half, py),
    };
    Ok(world)
}

/// Recover the face and pixel coordinate of a point on the cube
/// surface.
///
/// The face is identified by the axis pinned to `±cube_size / 2`; when
/// a point lies on an edge or corner (several axes pinned), the first
/// match in material-slot order wins, deterministically.
///
/// # Errors
///
/// [`PanoNavError::InvalidProjection`] if the point is non-finite, the
/// sizes are invalid, or no coordinate lies on a face plane.
pub fn unproject(
    world: Vec3,
    cube_size: f32,
    image_size: f32,
) -> Result<(CubeFace, f32, f32), PanoNavError> {
    if !world.is_finite() {
        return Err(PanoNavError::InvalidProjection(format!(
            "non-finite world point {world}"
        )));
    }
    if !cube_size.is_finite() || cube_size <= 0.0 {
        return Err(PanoNavError::InvalidProjection(format!(
            "cube size {cube_size} must be finite and positive"
        )));
    }
    if !image_size.is_finite() || image_size <= 0.0 {
        return Err(PanoNavError::InvalidProjection(format!(
            "image size {image_size} must be finite and positive"
        )));
    }

    let half = cube_size / 2.0;
    // Tolerance scales with the cube so unproject(project(..)) is
    // stable across room sizes.
    let eps = half * 1e-5;
    let on_plane = |coord: f32, sign: f32| (coord - sign * half).abs() <= eps;

    for face in CubeFace::MATERIAL_ORDER {
        let (pinned, sign, px, py) = match face {
            CubeFace::Right => (world.z, 1.0, world.x, world.y),
            CubeFace::Left => (world.z, -1.0, -world.x, world.y),
            CubeFace::Top => (world.y, 1.0, world.x, -world.z),
            CubeFace::Bottom => (world.y, -1.0, -world.x, world.z),
            CubeFace::Front => (world.x, -1.0, world.z, world.y),
            CubeFace::Back => (world.x, 1.0, -world.z, world.y),
        };
        if on_plane(pinned, sign) {
            let pixel_x = (px + half) / cube_size * image_size;
            let pixel_y = (half - py) / cube_size * image_size;
            return Ok((face, pixel_x, pixel_y));
        }
    }

    Err(PanoNavError::InvalidProjection(format!(
        "point {world} is not on the surface of a cube of size {cube_size}"
    )))
}
