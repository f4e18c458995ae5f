/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor)
/// which converts them into [`NavCommand`](crate::engine::NavCommand)
/// values. The host's window layer produces them from whatever event
/// loop it runs; nothing here depends on a windowing crate.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(InputEvent::key_down("KeyW")) {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down (includes OS auto-repeat).
    KeyDown {
        /// Physical key string in `winit::keyboard::KeyCode` debug
        /// format, e.g. `"KeyW"`, `"ArrowUp"`.
        key: String,
    },
    /// A key was released.
    KeyUp {
        /// Physical key string, as for [`InputEvent::KeyDown`].
        key: String,
    },
}

impl InputEvent {
    /// Convenience constructor for a key-down event.
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_owned(),
        }
    }

    /// Convenience constructor for a key-up event.
    #[must_use]
    pub fn key_up(key: &str) -> Self {
        Self::KeyUp {
            key: key.to_owned(),
        }
    }
}
