use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Panorama sequence and room-geometry parameters.
pub struct SceneOptions {
    /// Root name of the panorama set; texture paths derive from it as
    /// `{root}/{root}_{index}/Img_{N}_2048.jpg`.
    pub root: String,
    /// Edge length of the room cube, in world units.
    pub room_size: f32,
    /// World-space center of every room.
    pub room_center: Vec3,
    /// Camera position after a teleport or reset.
    pub entry_point: Vec3,
    /// Number of rooms in the sequence, when known. `None` disables
    /// upper-bound validation and navigation overruns surface only as
    /// texture-fetch failures.
    pub room_count: Option<u32>,
    /// Mirror the room mesh along X (`scale = [-1, 1, 1]`). Source
    /// panorama sets disagree on handedness, so this is configuration
    /// rather than a guessed constant.
    pub mirror_x: bool,
    /// Pixel size of the square source face images markers were
    /// recorded against.
    pub marker_image_size: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            root: "pano".to_owned(),
            room_size: 300.0,
            room_center: Vec3::ZERO,
            entry_point: Vec3::ZERO,
            room_count: None,
            mirror_x: false,
            marker_image_size: 2048.0,
        }
    }
}
