//! TUI Flappy (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_flappy::{core,engine,input,store,term,types}`
//! and hosts the binary's environment config and logger setup.

pub mod config;
pub mod logging;

pub use tui_flappy_core as core;
pub use tui_flappy_engine as engine;
pub use tui_flappy_input as input;
pub use tui_flappy_store as store;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;
