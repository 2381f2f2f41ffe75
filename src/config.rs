//! Process configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::GameConfig;

/// Where the high score lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u32,
    pub store: StoreKind,
    /// Overrides the default high score file.
    pub store_path: Option<PathBuf>,
    /// Overrides the default log file.
    pub log_path: Option<PathBuf>,
    pub game: GameConfig,
}

impl AppConfig {
    /// Read `FLAPPY_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Unset, empty or unparsable values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = get("FLAPPY_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);

        let store = match get("FLAPPY_STORE").as_deref() {
            Some(v) if v.eq_ignore_ascii_case("memory") => StoreKind::Memory,
            _ => StoreKind::File,
        };

        let mut game = GameConfig::default();
        if let Some(v) = get("FLAPPY_START_GATE") {
            game.start_gate = parse_flag(&v).unwrap_or(game.start_gate);
        }
        if let Some(v) = get("FLAPPY_CEILING") {
            game.ceiling_collision = parse_flag(&v).unwrap_or(game.ceiling_collision);
        }

        Self {
            seed,
            store,
            store_path: get("FLAPPY_STORE_PATH").map(PathBuf::from),
            log_path: get("FLAPPY_LOG_PATH").map(PathBuf::from),
            game,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
