//! Engine - the session layer between the pure core and the outside world.
//!
//! [`RunSession`] replaces process-wide globals with one explicit object: it
//! owns the run controller, the in-memory high score, and the persistence
//! writer, and exposes snapshots for renderers.

pub mod session;

pub use tui_flappy_core as core;
pub use tui_flappy_store as store;
pub use tui_flappy_types as types;

pub use session::RunSession;
