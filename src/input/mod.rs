//! Input handling: event types, the action vocabulary, and the input
//! processor that converts raw key events into engine commands.
//!
//! Hosts subscribe the processor to whatever event loop they run and
//! forward key events; the processor never installs global listeners
//! itself, so teardown is just dropping it.

/// Platform-agnostic input events.
pub mod event;
/// Bindable navigation actions.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::NavAction;
pub use processor::InputProcessor;
