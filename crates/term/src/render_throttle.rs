//! Frame pacing for static screens.
//!
//! While a run is active every tick changes the picture, so every frame is
//! drawn. On the start gate and the game over screen nothing moves; frames are
//! drawn when the visible state changes and otherwise at a slow heartbeat.

use crate::core::GameSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - `is_static=false`: always render.
    /// - `is_static=true`: render on fingerprint change, otherwise at most once
    ///   per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = fingerprint != self.last_fingerprint;
        let due = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if self.has_rendered && is_static && !changed && !due {
            return false;
        }

        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }

    /// Force the next call to render, e.g. after a terminal resize.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}

/// FNV-1a over the fields a static screen shows.
pub fn snapshot_fingerprint(snap: &GameSnapshot) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut h = OFFSET;
    let mut eat = |bytes: &[u8]| {
        for &b in bytes {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        }
    };

    eat(snap.phase.as_str().as_bytes());
    eat(&snap.run_id.to_le_bytes());
    eat(&snap.tick.to_le_bytes());
    eat(&snap.score.to_le_bytes());
    eat(&snap.high_score.to_le_bytes());
    eat(&[snap.new_best as u8]);
    eat(&snap.bird_y.to_bits().to_le_bytes());
    h
}
