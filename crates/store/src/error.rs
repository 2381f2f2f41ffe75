//! Store error type.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("store file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store lock poisoned")]
    Poisoned,
    #[error("could not determine a data directory")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StoreError>;
