//! Authoritative panorama sequence state: active room, marker
//! placements, and the texture-loading collaborators.
//!
//! The scene owns the navigation index exclusively. Index changes
//! derive a fresh [`PanoramaRoom`], re-filter the immutable marker
//! index down to the new room, and project every surviving marker onto
//! the cube surface. Camera reset and texture submission on top of an
//! index change are orchestrated by the
//! [`NavEngine`](crate::engine::NavEngine), which owns those
//! resources.

pub mod loader;
pub mod markers;
pub mod room;

pub use loader::{LoadResult, LoadState, TextureLoader, TextureSource};
pub use markers::{MarkerIndex, MarkerPlacement, MarkerRecord};
pub use room::PanoramaRoom;

use crate::cubemap::{self, CubeFace};
use crate::error::PanoNavError;
use crate::options::SceneOptions;

/// The panorama sequence and its active room.
pub struct PanoramaScene {
    options: SceneOptions,
    markers: MarkerIndex,
    current_index: u32,
    room: PanoramaRoom,
    placements: Vec<MarkerPlacement>,
}

impl PanoramaScene {
    /// Create a scene showing room 0 of the sequence.
    #[must_use]
    pub fn new(options: SceneOptions, markers: MarkerIndex) -> Self {
        let room = PanoramaRoom::derive(&options, 0);
        let placements = project_markers(&options, &markers, &room);
        Self {
            options,
            markers,
            current_index: 0,
            room,
            placements,
        }
    }

    /// Scene configuration.
    #[must_use]
    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    /// Index of the active room.
    #[must_use]
    pub const fn current_index(&self) -> u32 {
        self.current_index
    }

    /// The active room.
    #[must_use]
    pub const fn room(&self) -> &PanoramaRoom {
        &self.room
    }

    /// World-space marker placements for the active room.
    #[must_use]
    pub fn placements(&self) -> &[MarkerPlacement] {
        &self.placements
    }

    /// Switch to the given room.
    ///
    /// Derives the new room and recomputes marker placements. When a
    /// room count is configured, indices past the end are rejected
    /// instead of surfacing later as a texture-fetch failure.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::RoomOutOfRange`] when `index` is not below the
    /// configured room count.
    pub fn set_active_index(
        &mut self,
        index: u32,
    ) -> Result<&PanoramaRoom, PanoNavError> {
        if let Some(room_count) = self.options.room_count {
            if index >= room_count {
                return Err(PanoNavError::RoomOutOfRange {
                    index: u64::from(index),
                    room_count: Some(room_count),
                });
            }
        }
        self.current_index = index;
        self.room = PanoramaRoom::derive(&self.options, index);
        self.placements =
            project_markers(&self.options, &self.markers, &self.room);
        log::debug!(
            "activated room {} ({} markers)",
            self.room.identity(),
            self.placements.len()
        );
        Ok(&self.room)
    }

    /// Index of the room after the active one.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::RoomOutOfRange`] when the active index is
    /// `u32::MAX`: the successor does not exist, it must never wrap
    /// back to room 0.
    pub fn next_index(&self) -> Result<u32, PanoNavError> {
        self.current_index.checked_add(1).ok_or_else(|| {
            PanoNavError::RoomOutOfRange {
                index: u64::from(self.current_index) + 1,
                room_count: self.options.room_count,
            }
        })
    }

    /// Switch to the next room in the sequence.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::RoomOutOfRange`] at the end of a bounded
    /// sequence, or at the top of the addressable index range.
    pub fn next(&mut self) -> Result<&PanoramaRoom, PanoNavError> {
        let next = self.next_index()?;
        self.set_active_index(next)
    }

    /// Switch to the previous room. Clamps at room 0: calling this at
    /// the bottom re-activates room 0 rather than failing.
    ///
    /// # Errors
    ///
    /// Never fails for an unbounded sequence; with a configured count
    /// the clamped index is always in range.
    pub fn prev(&mut self) -> Result<&PanoramaRoom, PanoNavError> {
        self.set_active_index(self.current_index.saturating_sub(1))
    }
}

/// Project every marker of the room's panorama onto the cube surface.
///
/// A record with an unknown face image or out-of-contract pixel data
/// is rejected and logged, not placed at the origin: a marker at the
/// world origin would silently render in the middle of the room.
fn project_markers(
    options: &SceneOptions,
    markers: &MarkerIndex,
    room: &PanoramaRoom,
) -> Vec<MarkerPlacement> {
    let identity = room.identity();
    markers
        .for_room(&identity)
        .iter()
        .filter_map(|record| match project_marker(options, record) {
            Ok(placement) => Some(placement),
            Err(e) => {
                log::warn!(
                    "rejecting marker {} in {identity}: {e}",
                    record.id
                );
                None
            }
        })
        .collect()
}

fn project_marker(
    options: &SceneOptions,
    record: &MarkerRecord,
) -> Result<MarkerPlacement, PanoNavError> {
    let face = CubeFace::from_image_name(&record.image)?;
    let [x, y] = record.location_pixel;
    let world_position = cubemap::project(
        face,
        x,
        y,
        options.marker_image_size,
        options.room_size,
    )?;
    Ok(MarkerPlacement {
        marker_id: record.id,
        label: record.label.clone(),
        world_position: world_position + options.room_center,
    })
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn sample_markers() -> MarkerIndex {
        MarkerIndex::from_records(vec![
            MarkerRecord {
                id: 1,
                pano: "pano_0".to_owned(),
                image: "Img_4_2048.jpg".to_owned(),
                location_pixel: [0.0, 0.0],
                label: "Entrance".to_owned(),
            },
            MarkerRecord {
                id: 2,
                pano: "pano_1".to_owned(),
                image: "Img_2_2048.jpg".to_owned(),
                location_pixel: [1024.0, 1024.0],
                label: "Exhibit".to_owned(),
            },
            MarkerRecord {
                id: 3,
                pano: "pano_1".to_owned(),
                image: "nonsense.jpg".to_owned(),
                location_pixel: [10.0, 10.0],
                label: "Broken".to_owned(),
            },
        ])
    }

    fn scene() -> PanoramaScene {
        PanoramaScene::new(SceneOptions::default(), sample_markers())
    }

    #[test]
    fn starts_at_room_zero_with_its_markers() {
        let scene = scene();
        assert_eq!(scene.current_index(), 0);
        assert_eq!(scene.room().identity(), "pano_0");
        assert_eq!(scene.placements().len(), 1);
        // Front face, pixel (0, 0), image 2048, cube 300.
        assert_eq!(
            scene.placements()[0].world_position,
            Vec3::new(-150.0, 150.0, -150.0)
        );
    }

    #[test]
    fn switching_refilters_markers() {
        let mut scene = scene();
        let _ = scene.set_active_index(1).unwrap();
        let ids: Vec<u32> =
            scene.placements().iter().map(|p| p.marker_id).collect();
        // Marker 3 has a bogus face image and must be rejected, not
        // placed at the origin.
        assert_eq!(ids, vec![2]);
        assert_eq!(
            scene.placements()[0].world_position,
            Vec3::new(0.0, 0.0, 150.0)
        );
    }

    #[test]
    fn switch_away_and_back_is_deterministic() {
        let mut scene = scene();
        let before = scene.placements().to_vec();
        let _ = scene.set_active_index(1).unwrap();
        let _ = scene.set_active_index(0).unwrap();
        assert_eq!(scene.placements(), before.as_slice());
    }

    #[test]
    fn prev_at_zero_stays_at_zero() {
        let mut scene = scene();
        let _ = scene.prev().unwrap();
        assert_eq!(scene.current_index(), 0);
    }

    #[test]
    fn next_then_prev_returns_to_start() {
        let mut scene = scene();
        let _ = scene.set_active_index(4).unwrap();
        let _ = scene.next().unwrap();
        let _ = scene.prev().unwrap();
        assert_eq!(scene.current_index(), 4);
    }

    #[test]
    fn bounded_sequence_rejects_overrun() {
        let options = SceneOptions {
            room_count: Some(3),
            ..SceneOptions::default()
        };
        let mut scene = PanoramaScene::new(options, MarkerIndex::default());
        let _ = scene.set_active_index(2).unwrap();
        let err = scene.next().unwrap_err();
        assert!(matches!(
            err,
            PanoNavError::RoomOutOfRange {
                index: 3,
                room_count: Some(3)
            }
        ));
        // The failed switch left the scene untouched.
        assert_eq!(scene.current_index(), 2);
    }

    #[test]
    fn unbounded_sequence_allows_any_index() {
        let mut scene = scene();
        let room = scene.set_active_index(9999).unwrap();
        assert_eq!(room.identity(), "pano_9999");
    }

    #[test]
    fn next_at_top_of_index_range_errors_instead_of_wrapping() {
        let mut scene = scene();
        let _ = scene.set_active_index(u32::MAX).unwrap();
        let err = scene.next().unwrap_err();
        assert!(matches!(
            err,
            PanoNavError::RoomOutOfRange {
                index: 4_294_967_296,
                room_count: None
            }
        ));
        // The failed switch must not wrap to room 0.
        assert_eq!(scene.current_index(), u32::MAX);
        let _ = scene.prev().unwrap();
        assert_eq!(scene.current_index(), u32::MAX - 1);
    }

    #[test]
    fn room_center_offsets_placements() {
        let options = SceneOptions {
            room_center: Vec3::new(10.0, 0.0, 0.0),
            ..SceneOptions::default()
        };
        let scene = PanoramaScene::new(options, sample_markers());
        assert_eq!(
            scene.placements()[0].world_position,
            Vec3::new(-140.0, 150.0, -150.0)
        );
    }
}
