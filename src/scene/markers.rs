//! Marker metadata and world-space placements.
//!
//! Marker records are authored against source face images in pixel
//! coordinates and shipped as static JSON. They are loaded once at
//! startup into an immutable index keyed by panorama identity; room
//! switches only ever *read* it.

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::PanoNavError;

/// One point-of-interest record, as authored.
///
/// Field names mirror the external JSON shape:
/// `{ "ID": 4, "uPANO": "museum_2", "Image": "Img_4_2048.jpg",
///    "Location_Pixel": [512.0, 1024.0], "Asset_Name": "Fire exit" }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerRecord {
    /// Unique marker ID.
    #[serde(rename = "ID")]
    pub id: u32,
    /// Identity key of the panorama the marker belongs to
    /// (`"{root}_{index}"`).
    #[serde(rename = "uPANO")]
    pub pano: String,
    /// Canonical face image filename the pixel coordinate was recorded
    /// against.
    #[serde(rename = "Image")]
    pub image: String,
    /// Pixel coordinate on the source image, `[x, y]`, y growing
    /// downward.
    #[serde(rename = "Location_Pixel")]
    pub location_pixel: [f32; 2],
    /// Human-readable label shown on the marker billboard.
    #[serde(rename = "Asset_Name")]
    pub label: String,
}

/// Immutable marker index keyed by panorama identity.
///
/// Built once at process start; lookups during room switches are
/// allocation-free.
#[derive(Debug, Clone, Default)]
pub struct MarkerIndex {
    by_pano: FxHashMap<String, Vec<MarkerRecord>>,
    len: usize,
}

impl MarkerIndex {
    /// Build the index from a JSON array of marker records.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::MarkerData`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, PanoNavError> {
        let records: Vec<MarkerRecord> = serde_json::from_str(json)
            .map_err(|e| PanoNavError::MarkerData(e.to_string()))?;
        Ok(Self::from_records(records))
    }

    /// Build the index from already-parsed records.
    #[must_use]
    pub fn from_records(records: Vec<MarkerRecord>) -> Self {
        let len = records.len();
        let mut by_pano: FxHashMap<String, Vec<MarkerRecord>> =
            FxHashMap::default();
        for record in records {
            by_pano.entry(record.pano.clone()).or_default().push(record);
        }
        Self { by_pano, len }
    }

    /// Markers belonging to the given panorama identity, in authored
    /// order. Unknown identities yield an empty slice.
    #[must_use]
    pub fn for_room(&self, identity: &str) -> &[MarkerRecord] {
        self.by_pano.get(identity).map_or(&[], Vec::as_slice)
    }

    /// Total number of records across all panoramas.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no records at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A marker resolved to a world-space position on the cube surface.
///
/// Recomputed whenever the active room changes. Relative to the room
/// center, exactly one coordinate of `world_position` has absolute
/// value `size / 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlacement {
    /// ID of the source [`MarkerRecord`].
    pub marker_id: u32,
    /// Label shown on the billboard.
    pub label: String,
    /// Position on the inner cube surface.
    pub world_position: Vec3,
}

impl MarkerPlacement {
    /// Billboard rotation orienting the label's +Z axis toward the
    /// camera.
    ///
    /// Computed fresh from the current camera position — call it every
    /// tick, never cache the result across frames. A camera sitting
    /// exactly on the marker yields the identity rotation.
    #[must_use]
    pub fn facing(&self, camera_position: Vec3) -> Quat {
        let toward = (camera_position - self.world_position).normalize_or_zero();
        if toward == Vec3::ZERO {
            return Quat::IDENTITY;
        }
        Quat::from_rotation_arc(Vec3::Z, toward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"[
        {
            "ID": 1,
            "uPANO": "museum_0",
            "Image": "Img_4_2048.jpg",
            "Location_Pixel": [0.0, 0.0],
            "Asset_Name": "Entrance"
        },
        {
            "ID": 2,
            "uPANO": "museum_0",
            "Image": "Img_2_2048.jpg",
            "Location_Pixel": [1024.0, 512.0],
            "Asset_Name": "Ticket desk"
        },
        {
            "ID": 3,
            "uPANO": "museum_1",
            "Image": "Img_0_2048.jpg",
            "Location_Pixel": [2048.0, 2048.0],
            "Asset_Name": "Stairwell"
        }
    ]"#;

    #[test]
    fn parses_authored_json_shape() {
        let index = MarkerIndex::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());

        let room0 = index.for_room("museum_0");
        assert_eq!(room0.len(), 2);
        assert_eq!(room0[0].id, 1);
        assert_eq!(room0[0].label, "Entrance");
        assert_eq!(room0[0].location_pixel, [0.0, 0.0]);
        assert_eq!(index.for_room("museum_1").len(), 1);
    }

    #[test]
    fn unknown_identity_yields_empty_slice() {
        let index = MarkerIndex::from_json(SAMPLE_JSON).unwrap();
        assert!(index.for_room("museum_9").is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = MarkerIndex::from_json("not json").unwrap_err();
        assert!(matches!(err, PanoNavError::MarkerData(_)));
        // Missing required field
        assert!(MarkerIndex::from_json(r#"[{"ID": 1}]"#).is_err());
    }

    #[test]
    fn facing_points_toward_camera() {
        let placement = MarkerPlacement {
            marker_id: 1,
            label: "Entrance".to_owned(),
            world_position: Vec3::new(0.0, 0.0, 150.0),
        };
        let camera = Vec3::ZERO;
        let rotated = placement.facing(camera) * Vec3::Z;
        let expected =
            (camera - placement.world_position).normalize_or_zero();
        assert!((rotated - expected).length() < 1e-5);
    }

    #[test]
    fn facing_degenerates_to_identity_on_the_marker() {
        let placement = MarkerPlacement {
            marker_id: 1,
            label: String::new(),
            world_position: Vec3::new(1.0, 2.0, 3.0),
        };
        assert_eq!(placement.facing(placement.world_position), Quat::IDENTITY);
    }
}
