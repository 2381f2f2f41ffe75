//! High score encoding on top of a [`KeyValueStore`].
//!
//! The value is a decimal integer string under [`HIGH_SCORE_KEY`]. Anything
//! that fails to parse is treated as if the key were absent.

use log::{info, warn};

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::types::HIGH_SCORE_KEY;

/// Parse a persisted value. Absent or malformed values yield 0.
pub fn parse_high_score(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(score) => score,
        Err(_) => {
            warn!("ignoring malformed high score value {raw:?}");
            0
        }
    }
}

/// Load the high score once at startup.
///
/// Store failures are logged and read as 0; they never reach the caller.
pub fn load_high_score(store: &dyn KeyValueStore) -> u32 {
    match store.get(HIGH_SCORE_KEY) {
        Ok(raw) => {
            let score = parse_high_score(raw.as_deref());
            info!("loaded high score {score}");
            score
        }
        Err(e) => {
            warn!("failed to load high score: {e}");
            0
        }
    }
}

pub fn write_high_score(store: &dyn KeyValueStore, score: u32) -> Result<()> {
    store.set(HIGH_SCORE_KEY, &score.to_string())
}
