//! Cubemap face addressing and pixel-to-world projection.
//!
//! A panorama room is a cube whose six inner faces carry one texture
//! each. Two numbering schemes coexist and must never be confused:
//!
//! - the **material slot** order `right, left, top, bottom, front,
//!   back`, which is the order the rendering engine enumerates cube
//!   materials in (any other order visibly swaps faces), and
//! - the **image index** `N` baked into the source filenames
//!   (`Img_{N}_2048.jpg`), where `0 → top`, `1 → back`, `2 → right`,
//!   `3 → left`, `4 → front`, `5 → bottom`.
//!
//! [`CubeFace`] is the single canonical identity; both numberings are
//! derived from it.

pub mod projection;

pub use projection::{project, unproject};

use crate::error::PanoNavError;

/// One of the six faces of a panorama cube.
///
/// Discriminants follow the material-slot order, so `face as usize`
/// is the index into a material/texture list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum CubeFace {
    /// +Z face (material slot 0).
    Right = 0,
    /// -Z face (material slot 1).
    Left = 1,
    /// +Y face (material slot 2).
    Top = 2,
    /// -Y face (material slot 3).
    Bottom = 3,
    /// -X face (material slot 4).
    Front = 4,
    /// +X face (material slot 5).
    Back = 5,
}

impl CubeFace {
    /// All six faces in material-slot order.
    pub const MATERIAL_ORDER: [CubeFace; 6] = [
        CubeFace::Right,
        CubeFace::Left,
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Front,
        CubeFace::Back,
    ];

    /// Index into a material/texture list (0..=5).
    #[must_use]
    pub const fn material_slot(self) -> usize {
        self as usize
    }

    /// The image index `N` used in source filenames (`Img_{N}_...`).
    #[must_use]
    pub const fn image_index(self) -> u32 {
        match self {
            Self::Top => 0,
            Self::Back => 1,
            Self::Right => 2,
            Self::Left => 3,
            Self::Front => 4,
            Self::Bottom => 5,
        }
    }

    /// Look up the face for an image index.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::InvalidProjection`] for indices outside `0..=5`.
    /// A fallback face would mask marker-metadata bugs, so there is
    /// none.
    pub fn from_image_index(index: u32) -> Result<Self, PanoNavError> {
        match index {
            0 => Ok(Self::Top),
            1 => Ok(Self::Back),
            2 => Ok(Self::Right),
            3 => Ok(Self::Left),
            4 => Ok(Self::Front),
            5 => Ok(Self::Bottom),
            _ => Err(PanoNavError::InvalidProjection(format!(
                "image index {index} outside 0..=5"
            ))),
        }
    }

    /// The canonical source filename for this face.
    #[must_use]
    pub const fn image_name(self) -> &'static str {
        match self {
            Self::Top => "Img_0_2048.jpg",
            Self::Back => "Img_1_2048.jpg",
            Self::Right => "Img_2_2048.jpg",
            Self::Left => "Img_3_2048.jpg",
            Self::Front => "Img_4_2048.jpg",
            Self::Bottom => "Img_5_2048.jpg",
        }
    }

    /// Look up the face for a canonical source filename.
    ///
    /// Total on the six canonical names; everything else is an error,
    /// never a default.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::UnknownFaceImage`] for any other input.
    pub fn from_image_name(name: &str) -> Result<Self, PanoNavError> {
        Self::MATERIAL_ORDER
            .into_iter()
            .find(|face| face.image_name() == name)
            .ok_or_else(|| PanoNavError::UnknownFaceImage(name.to_owned()))
    }
}
