//! Crate-level error types.

use std::fmt;

/// Errors produced by the panonav crate.
#[derive(Debug)]
pub enum PanoNavError {
    /// A face image filename outside the six canonical names.
    UnknownFaceImage(String),
    /// Projection rejected its inputs (non-finite coordinates,
    /// non-positive sizes, or a point off the cube surface).
    InvalidProjection(String),
    /// Navigation past the last known room, or past the top of the
    /// addressable index range, was requested.
    RoomOutOfRange {
        /// The requested room index.
        index: u64,
        /// The configured number of rooms, when a bound is configured.
        room_count: Option<u32>,
    },
    /// Asynchronous texture fetch failed for a room.
    ResourceLoad(String),
    /// Marker metadata parsing/validation failure.
    MarkerData(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
}

impl fmt::Display for PanoNavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFaceImage(name) => {
                write!(f, "unknown face image: {name}")
            }
            Self::InvalidProjection(msg) => {
                write!(f, "invalid projection input: {msg}")
            }
            Self::RoomOutOfRange {
                index,
                room_count: Some(room_count),
            } => {
                write!(
                    f,
                    "room index {index} out of range ({room_count} rooms)"
                )
            }
            Self::RoomOutOfRange {
                index,
                room_count: None,
            } => {
                write!(f, "room index {index} exceeds the addressable range")
            }
            Self::ResourceLoad(msg) => {
                write!(f, "resource load error: {msg}")
            }
            Self::MarkerData(msg) => write!(f, "marker data error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
        }
    }
}

impl std::error::Error for PanoNavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PanoNavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
