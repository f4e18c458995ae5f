// -- Lint policy ---------------------------------------------------------
// Crate-wide lint groups live in Cargo.toml [lints]; the denies here
// are the ones test code must also honor.

// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]
// Import hygiene
#![deny(clippy::wildcard_imports)]

//! Panoramic-cube navigation and marker-projection engine.
//!
//! A "room" is a cube whose six inner faces carry panorama textures.
//! This crate assigns face images to cube faces, projects marker pixel
//! coordinates onto the cube surface, drives a damped first-person
//! camera inside the room, and teleports between an ordered sequence
//! of rooms with a latest-index-wins texture loading policy.
//!
//! # Key entry points
//!
//! - [`engine::NavEngine`] - the navigation engine; commands in, ticks
//!   through
//! - [`input::InputProcessor`] - raw key events to [`engine::NavCommand`]
//! - [`cubemap`] - face addressing and pixel↔world projection
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything runs on the host's render-loop thread except texture
//! fetching, which lives on a background [`scene::TextureLoader`]
//! thread delivering results through a lock-free triple buffer. The
//! host supplies look orientation via
//! [`camera::OrientationSource`] and a frame delta via
//! [`engine::NavEngine::tick`]; rendering, pointer capture, and image
//! decoding stay on the host side of the seam.

pub mod camera;
pub mod cubemap;
pub mod engine;
mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;

pub use error::PanoNavError;
