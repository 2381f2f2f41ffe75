//! File-backed `env_logger` setup for the terminal binary.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub const LOG_FILE_NAME: &str = "flappy.log";

/// Initializes the global logger, appending to `path`.
///
/// The terminal is in raw mode while the game runs, so records never go to
/// stderr. The filter comes from `RUST_LOG`, defaulting to `info`. Returns
/// `None` (logging disabled) when the file or its directory cannot be created.
pub fn init(path: &Path) -> Option<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path).ok()?;

    let env = Env::default().default_filter_or(LevelFilter::Info.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();
    Some(path.to_path_buf())
}

/// `<data dir>/flappy.log`, or `None` without a home directory.
pub fn default_log_path() -> Option<PathBuf> {
    crate::store::data_dir().ok().map(|dir| dir.join(LOG_FILE_NAME))
}
