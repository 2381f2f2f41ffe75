//! JSON file store.
//!
//! File format (pretty-printed JSON):
//!
//! ```text
//! { "version": 1, "entries": { "highScore": "7" } }
//! ```
//!
//! Writes go to a sibling temp file that is then renamed over the target, so a
//! crash mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;

pub const STORE_FILE_NAME: &str = "highscore.json";
const STORE_VERSION: u32 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Platform data directory for this application.
pub fn data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "tui-flappy").ok_or(StoreError::NoDataDir)?;
    Ok(dirs.data_dir().to_path_buf())
}

pub struct FileStore {
    path: PathBuf,
    /// Serialises read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store at `<data dir>/highscore.json`.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(data_dir()?.join(STORE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoreFile> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StoreFile::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn write(&self, file: &StoreFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_vec_pretty(file)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.read()?.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut file = match self.read() {
            Ok(file) => file,
            Err(StoreError::Json(e)) => {
                warn!("replacing unreadable store {}: {e}", self.path.display());
                StoreFile::default()
            }
            Err(e) => return Err(e),
        };
        file.version = STORE_VERSION;
        file.entries.insert(key.to_string(), value.to_string());
        self.write(&file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("none.json"));
        assert_eq!(store.get("highScore").unwrap(), None);
    }

    #[test]
    fn set_creates_parent_dirs_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(STORE_FILE_NAME);

        FileStore::new(&path).set("highScore", "9").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("highScore").unwrap().as_deref(), Some("9"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn set_keeps_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join(STORE_FILE_NAME));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).get("highScore").unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn set_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        fs::write(&path, "garbage{").unwrap();

        let store = FileStore::new(&path);
        store.set("highScore", "2").unwrap();
        assert_eq!(store.get("highScore").unwrap().as_deref(), Some("2"));
        assert_eq!(
            FileStore::new(&path).get("highScore").unwrap().as_deref(),
            Some("2")
        );
    }
}
