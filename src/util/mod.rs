//! Shared utilities for the navigation engine.

pub mod frame_timing;
