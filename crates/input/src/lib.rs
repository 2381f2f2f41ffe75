//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]. A flap
//! carries no payload, so there is no repeat handling: every press is one
//! impulse.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
