//! Persistence for the high score.
//!
//! The game core never touches storage. The session loads the high score once
//! through a [`KeyValueStore`] and hands new bests to a [`ScoreWriter`], which
//! persists them without blocking the tick loop.
//!
//! # Stores
//!
//! - [`MemoryStore`]: in-process map, used by tests and `FLAPPY_STORE=memory`
//! - [`FileStore`]: a small JSON document in the platform data directory
//!
//! # Failure policy
//!
//! Every storage error is logged and swallowed at this boundary:
//!
//! - load failure → high score 0
//! - malformed value → high score 0
//! - save failure → the in-memory value stays, nothing retries
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tui_flappy_store::{load_high_score, KeyValueStore, MemoryStore, ScoreWriter};
//!
//! let store = Arc::new(MemoryStore::new());
//! assert_eq!(load_high_score(&*store), 0);
//!
//! let writer = ScoreWriter::inline(store.clone());
//! writer.submit(7);
//! assert_eq!(store.get("highScore").unwrap().as_deref(), Some("7"));
//! ```

pub mod error;
pub mod file;
pub mod high_score;
pub mod kv;
pub mod writer;

pub use tui_flappy_types as types;

pub use error::{Result, StoreError};
pub use file::{data_dir, FileStore, STORE_FILE_NAME};
pub use high_score::{load_high_score, parse_high_score, write_high_score};
pub use kv::{KeyValueStore, MemoryStore};
pub use writer::{BackgroundWriter, ScoreWriter};
