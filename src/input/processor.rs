//! Converts raw key events into navigation commands.
//!
//! The `InputProcessor` owns all transient input state (which teleport
//! keys are physically held) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::NavEngine::execute) method.

use std::collections::HashSet;

use super::event::InputEvent;
use super::keyboard::NavAction;
use crate::camera::MoveDirection;
use crate::engine::NavCommand;
use crate::options::KeybindingOptions;

/// Converts raw key events into [`NavCommand`]s.
///
/// Movement actions translate to flag commands on both key-down and
/// key-up; repeated identical events are harmless because the flag
/// writes downstream are idempotent. Teleport actions are
/// edge-triggered: OS auto-repeat while the key is held produces
/// nothing, and release re-arms the key.
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Physically held keys bound to edge-triggered actions.
    held_edge_keys: HashSet<String>,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_bindings: KeybindingOptions::default(),
            held_edge_keys: HashSet::new(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            held_edge_keys: HashSet::new(),
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings (e.g. after a preset load).
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held_edge_keys.clear();
    }

    /// Release all transient key state.
    ///
    /// Hosts call this on focus loss, where key-up events for held
    /// keys never arrive.
    pub fn release_all(&mut self) {
        self.held_edge_keys.clear();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::KeyDown { key } => self.handle_key(&key, true),
            InputEvent::KeyUp { key } => self.handle_key(&key, false),
        }
    }

    fn handle_key(&mut self, key: &str, pressed: bool) -> Option<NavCommand> {
        let action = self.key_bindings.lookup(key)?;

        if action.is_edge_triggered() {
            if pressed {
                // Auto-repeat: still down, already fired.
                if !self.held_edge_keys.insert(key.to_owned()) {
                    return None;
                }
                return edge_command(action);
            }
            let _ = self.held_edge_keys.remove(key);
            return None;
        }

        let direction = move_direction(action)?;
        Some(NavCommand::Move {
            direction,
            active: pressed,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// The command fired on the down-edge of an edge-triggered action.
fn edge_command(action: NavAction) -> Option<NavCommand> {
    match action {
        NavAction::TeleportNext => Some(NavCommand::TeleportNext),
        NavAction::TeleportPrev => Some(NavCommand::TeleportPrev),
        _ => None,
    }
}

/// The movement direction held by a hold-style action.
fn move_direction(action: NavAction) -> Option<MoveDirection> {
    match action {
        NavAction::MoveForward => Some(MoveDirection::Forward),
        NavAction::MoveBackward => Some(MoveDirection::Backward),
        NavAction::MoveLeft => Some(MoveDirection::Left),
        NavAction::MoveRight => Some(MoveDirection::Right),
        NavAction::MoveUp => Some(MoveDirection::Up),
        NavAction::MoveDown => Some(MoveDirection::Down),
        NavAction::TeleportNext | NavAction::TeleportPrev => None,
    }
}
