//! Immutable per-room values derived from the scene options.

use glam::Vec3;

use crate::cubemap::CubeFace;
use crate::options::SceneOptions;

/// One cubemap room in a panorama sequence.
///
/// Identified by `(root, index)`; the six texture paths derive
/// deterministically from that identity. Rooms are never mutated in
/// place — changing the active index replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct PanoramaRoom {
    root: String,
    index: u32,
    size: f32,
    center: Vec3,
    mirror_x: bool,
    texture_paths: [String; 6],
}

impl PanoramaRoom {
    /// Derive the room for `index` from the scene options.
    #[must_use]
    pub fn derive(options: &SceneOptions, index: u32) -> Self {
        let root = &options.root;
        let texture_paths = CubeFace::MATERIAL_ORDER
            .map(|face| format!("{root}/{root}_{index}/{}", face.image_name()));
        Self {
            root: root.clone(),
            index,
            size: options.room_size,
            center: options.room_center,
            mirror_x: options.mirror_x,
            texture_paths,
        }
    }

    /// Root name of the panorama set.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Index of this room in the sequence.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Edge length of the room cube, in world units.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// World-space center of the room.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// The identity key markers are filtered by: `"{root}_{index}"`.
    #[must_use]
    pub fn identity(&self) -> String {
        format!("{}_{}", self.root, self.index)
    }

    /// Texture paths in material-slot order
    /// (`right, left, top, bottom, front, back`).
    #[must_use]
    pub const fn texture_paths(&self) -> &[String; 6] {
        &self.texture_paths
    }

    /// Scale to apply to the room mesh. X is negated when the
    /// configured handedness calls for mirroring.
    #[must_use]
    pub const fn mesh_scale(&self) -> Vec3 {
        if self.mirror_x {
            Vec3::new(-1.0, 1.0, 1.0)
        } else {
            Vec3::ONE
        }
    }
}
