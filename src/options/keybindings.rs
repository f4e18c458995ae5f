use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::NavAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// An action may carry several keys (WASD plus arrow keys bind the
/// same four directions by default). Key strings use the
/// `winit::keyboard::KeyCode` debug format: `"KeyW"`, `"ArrowUp"`.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `MoveForward` → `["KeyW",
    /// "ArrowUp"]`).
    pub bindings: HashMap<NavAction, Vec<String>>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, NavAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (
                NavAction::MoveForward,
                vec!["KeyW".to_owned(), "ArrowUp".to_owned()],
            ),
            (
                NavAction::MoveBackward,
                vec!["KeyS".to_owned(), "ArrowDown".to_owned()],
            ),
            (
                NavAction::MoveLeft,
                vec!["KeyA".to_owned(), "ArrowLeft".to_owned()],
            ),
            (
                NavAction::MoveRight,
                vec!["KeyD".to_owned(), "ArrowRight".to_owned()],
            ),
            (NavAction::MoveUp, vec!["KeyE".to_owned()]),
            (NavAction::MoveDown, vec!["KeyQ".to_owned()]),
            (NavAction::TeleportNext, vec!["KeyN".to_owned()]),
            (NavAction::TeleportPrev, vec!["KeyB".to_owned()]),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// Must be called after deserializing or mutating `bindings`; a
    /// key bound to several actions keeps an arbitrary one.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, keys) in &self.bindings {
            for key in keys {
                let _ = self.key_to_action.insert(key.clone(), *action);
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavAction> {
        self.key_to_action.get(key).copied()
    }
}
