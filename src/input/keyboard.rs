use serde::{Deserialize, Serialize};

/// Navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = ["KeyW", "ArrowUp"]
/// teleport_next = ["KeyN"]
/// ```
///
/// Movement actions are *held* (active while the key is down);
/// teleport actions are *edge-triggered* (fire once per key-down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Hold: move toward the look direction.
    MoveForward,
    /// Hold: move away from the look direction.
    MoveBackward,
    /// Hold: strafe left.
    MoveLeft,
    /// Hold: strafe right.
    MoveRight,
    /// Hold: rise along the up vector (vertical movement only).
    MoveUp,
    /// Hold: descend against the up vector (vertical movement only).
    MoveDown,
    /// Edge: teleport to the next room.
    TeleportNext,
    /// Edge: teleport to the previous room (clamps at room 0).
    TeleportPrev,
}

impl NavAction {
    /// Whether this action fires once per key-down rather than while
    /// held.
    #[must_use]
    pub const fn is_edge_triggered(self) -> bool {
        matches!(self, Self::TeleportNext | Self::TeleportPrev)
    }
}
