//! Terminal rendering for the flappy game.
//!
//! A small game-oriented layer: [`GameView`] draws a snapshot into a
//! [`FrameBuffer`] (pure, testable), [`TerminalRenderer`] diffs framebuffers
//! onto the real terminal, and [`RenderThrottle`] keeps static screens cheap.
//! No widgets or layout engine.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, BIRD_GLYPH, PIPE_GLYPH};
pub use render_throttle::{snapshot_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
