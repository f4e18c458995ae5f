//! Centralized runtime configuration with TOML preset support.
//!
//! All tweakable settings (movement feel, room geometry, keyboard
//! bindings) are consolidated here. Options serialize to/from TOML so
//! per-deployment presets (museum kiosk vs. hangar walkthrough) are
//! data, not code.

mod keybindings;
mod movement;
mod scene;

use std::path::Path;

pub use keybindings::KeybindingOptions;
pub use movement::MovementOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::PanoNavError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[movement]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Movement integrator parameters.
    pub movement: MovementOptions,
    /// Panorama sequence and room-geometry parameters.
    pub scene: SceneOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`PanoNavError::Io`] on read failure,
    /// [`PanoNavError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, PanoNavError> {
        let content = std::fs::read_to_string(path).map_err(PanoNavError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| PanoNavError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`PanoNavError::OptionsParse`] on serialization failure,
    /// [`PanoNavError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), PanoNavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PanoNavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PanoNavError::Io)?;
        }
        std::fs::write(path, content).map_err(PanoNavError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NavAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[movement]
move_speed = 500.0

[scene]
root = "hangar"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.movement.move_speed, 500.0);
        assert_eq!(opts.scene.root, "hangar");
        // Everything else should be default
        assert_eq!(opts.movement.damping, 10.0);
        assert_eq!(opts.scene.room_size, 300.0);
        assert_eq!(opts.scene.room_count, None);
        assert!(!opts.scene.mirror_x);
    }

    #[test]
    fn keybinding_lookup_defaults() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(NavAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(NavAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyN"),
            Some(NavAction::TeleportNext)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyB"),
            Some(NavAction::TeleportPrev)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebound_key_overrides_default() {
        let mut opts = Options::default();
        let _ = opts
            .keybindings
            .bindings
            .insert(NavAction::TeleportNext, vec!["Space".to_owned()]);
        opts.keybindings.rebuild_reverse_map();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(NavAction::TeleportNext)
        );
        assert_eq!(opts.keybindings.lookup("KeyN"), None);
    }
}
