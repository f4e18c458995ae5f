//! The engine's complete interactive vocabulary.
//!
//! Every user-facing navigation operation — whether triggered by a key
//! press, a numeric room field, or a programmatic call — is
//! represented as a `NavCommand`. Consumers construct commands and
//! pass them to [`NavEngine::execute`](super::NavEngine::execute).

use crate::camera::MoveDirection;

/// A discrete or held operation the navigation engine can perform.
///
/// The engine never cares *how* a command was triggered — keyboard,
/// GUI, or API all look identical:
///
/// ```ignore
/// engine.execute(NavCommand::TeleportNext)?;
/// engine.execute(NavCommand::JumpTo { index: 4 })?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Set or clear one of the six movement direction flags.
    Move {
        /// Which direction flag.
        direction: MoveDirection,
        /// `true` on key-down, `false` on key-up.
        active: bool,
    },

    /// Teleport to the next room (edge-triggered key).
    TeleportNext,

    /// Teleport to the previous room, clamping at room 0
    /// (edge-triggered key).
    TeleportPrev,

    /// Teleport directly to a room by number (numeric input field).
    /// Negative input clamps to room 0; input past `u32::MAX` is
    /// rejected, never silently remapped to another room.
    JumpTo {
        /// Requested room index.
        index: i64,
    },

    /// Reset the camera to the configured entry point without
    /// changing rooms.
    ResetCamera,
}
