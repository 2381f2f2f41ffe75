//! Run session - process-wide owner of the game, the high score and persistence.
//!
//! Lifecycle:
//!
//! - **init**: [`RunSession::new`] loads the high score once from the injected
//!   store, then either arms the start gate or starts the first run.
//! - **per tick**: [`RunSession::tick`] advances the game; on the tick that ends
//!   a run, a score above the high score is recorded in memory and handed to
//!   the [`ScoreWriter`] without waiting for it.
//! - **teardown**: [`RunSession::shutdown`] drains pending writes.

use log::{debug, info};

use crate::core::{GameSnapshot, GameState, TickOutcome};
use crate::store::{load_high_score, KeyValueStore, ScoreWriter};
use crate::types::{Collision, GameAction, GameConfig, RunPhase};

pub struct RunSession {
    game: GameState,
    high_score: u32,
    /// The most recently finished run beat the previous high score.
    new_best: bool,
    writer: ScoreWriter,
}

impl RunSession {
    pub fn new(config: GameConfig, seed: u32, store: &dyn KeyValueStore, writer: ScoreWriter) -> Self {
        let high_score = load_high_score(store);
        let mut game = GameState::new(config, seed);
        if config.start_gate {
            game.arm();
        } else {
            game.start();
        }

        debug!(
            "session ready: phase={} seed={} high_score={}",
            game.phase().as_str(),
            seed,
            high_score
        );

        Self {
            game,
            high_score,
            new_best: false,
            writer,
        }
    }

    /// Route a player action. Returns whether it changed anything.
    pub fn handle(&mut self, action: GameAction) -> bool {
        let changed = self.game.apply_action(action);
        if changed && matches!(action, GameAction::Start | GameAction::Restart) {
            self.new_best = false;
            debug!("run {} started", self.game.run_id());
        }
        changed
    }

    /// Advance one fixed tick.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.game.tick();
        if let Some(collision) = outcome.collision {
            self.finish_run(collision);
        }
        outcome
    }

    fn finish_run(&mut self, collision: Collision) {
        let score = self.game.score();
        info!(
            "run {} over after {} ticks: score={} cause={:?}",
            self.game.run_id(),
            self.game.tick_count(),
            score,
            collision
        );

        if score > self.high_score {
            info!("new high score {} (was {})", score, self.high_score);
            self.high_score = score;
            self.new_best = true;
            self.writer.submit(score);
        }
    }

    /// Flush pending persistence. Call once before exiting.
    pub fn shutdown(&mut self) {
        self.writer.flush();
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn phase(&self) -> RunPhase {
        self.game.phase()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn new_best(&self) -> bool {
        self.new_best
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        out.high_score = self.high_score;
        out.new_best = self.new_best;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::MemoryStore;
    use crate::types::HIGH_SCORE_KEY;

    fn session_with(store: Arc<MemoryStore>, config: GameConfig) -> RunSession {
        RunSession::new(config, 7, &*store, ScoreWriter::inline(store.clone()))
    }

    fn run_until_over(session: &mut RunSession) {
        for _ in 0..10_000 {
            if !session.phase().is_active() {
                return;
            }
            session.tick();
        }
        panic!("run never ended");
    }

    #[test]
    fn start_gate_arms_the_game() {
        let session = session_with(Arc::new(MemoryStore::new()), GameConfig::default());
        assert_eq!(session.phase(), RunPhase::Ready);
    }

    #[test]
    fn no_start_gate_starts_immediately() {
        let config = GameConfig {
            start_gate: false,
            ..GameConfig::default()
        };
        let session = session_with(Arc::new(MemoryStore::new()), config);
        assert_eq!(session.phase(), RunPhase::Active);
    }

    #[test]
    fn loads_high_score_at_init() {
        let store = Arc::new(MemoryStore::with_entry(HIGH_SCORE_KEY, "21"));
        let session = session_with(store, GameConfig::default());
        assert_eq!(session.high_score(), 21);
    }

    #[test]
    fn zero_score_run_does_not_persist() {
        let store = Arc::new(MemoryStore::new());
        let mut session = session_with(store.clone(), GameConfig::default());
        session.handle(GameAction::Start);
        run_until_over(&mut session);

        assert_eq!(session.score(), 0);
        assert!(!session.new_best());
        assert_eq!(store.get(HIGH_SCORE_KEY).unwrap(), None);
    }

    #[test]
    fn snapshot_carries_high_score() {
        let store = Arc::new(MemoryStore::with_entry(HIGH_SCORE_KEY, "3"));
        let session = session_with(store, GameConfig::default());
        let snap = session.snapshot();
        assert_eq!(snap.high_score, 3);
        assert!(!snap.new_best);
        assert_eq!(snap.phase, RunPhase::Ready);
    }
}
