//! Game state module - the run controller
//!
//! Wraps a [`World`] with the run lifecycle (`Idle → Ready → Active → Over`)
//! and routes player actions. Ticks are only simulated while a run is active;
//! once a collision is reported the run is over and nothing moves until an
//! explicit start/restart rebuilds the world.

use crate::bird::Bird;
use crate::obstacles::ObstacleStream;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, ObstacleSnapshot};
use crate::types::{Collision, GameAction, GameConfig, RunPhase};
use crate::world::{TickOutcome, World};

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    phase: RunPhase,
    world: World,
    /// Second buffer for `World::step_into`, swapped with `world` every tick.
    scratch: World,
    /// Monotonic run id (increments on every start/restart).
    run_id: u32,
    last_collision: Option<Collision>,
}

impl GameState {
    /// Create an idle game with the given RNG seed.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let world = World::new(&config, SimpleRng::new(seed));
        Self {
            config,
            phase: RunPhase::Idle,
            scratch: world.clone(),
            world,
            run_id: 0,
            last_collision: None,
        }
    }

    /// Show the start gate. Only valid from `Idle`.
    pub fn arm(&mut self) -> bool {
        if self.phase != RunPhase::Idle {
            return false;
        }
        self.phase = RunPhase::Ready;
        true
    }

    /// Begin a new run if none is active.
    ///
    /// Bird, score and obstacles are reinitialised. The RNG continues from its
    /// current state so consecutive runs differ but stay reproducible.
    pub fn start(&mut self) -> bool {
        if !self.phase.accepts_start() {
            return false;
        }
        self.world = World::new(&self.config, self.world.rng());
        self.scratch.clone_from(&self.world);
        self.phase = RunPhase::Active;
        self.run_id = self.run_id.wrapping_add(1);
        self.last_collision = None;
        true
    }

    /// Upward impulse. No effect unless the run is active.
    pub fn flap(&mut self) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        self.world.apply_impulse(&self.config);
        true
    }

    /// Apply a game action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flap => self.flap(),
            GameAction::Start | GameAction::Restart => self.start(),
        }
    }

    /// Advance one fixed tick.
    ///
    /// Outside an active run this is a no-op returning an empty outcome.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.phase.is_active() {
            return TickOutcome::default();
        }

        let outcome = self.world.step_into(&self.config, &mut self.scratch);
        std::mem::swap(&mut self.world, &mut self.scratch);

        if let Some(collision) = outcome.collision {
            self.phase = RunPhase::Over;
            self.last_collision = Some(collision);
        }

        outcome
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    pub fn score(&self) -> u32 {
        self.world.score()
    }

    pub fn bird(&self) -> &Bird {
        self.world.bird()
    }

    pub fn obstacles(&self) -> &ObstacleStream {
        self.world.obstacles()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Ticks simulated in the current run.
    pub fn tick_count(&self) -> u64 {
        self.world.tick()
    }

    /// What ended the last run, if it has ended.
    pub fn last_collision(&self) -> Option<Collision> {
        self.last_collision
    }

    /// Write the render-facing view into `out`.
    ///
    /// Reuses `out.obstacles`' allocation. High-score fields are left for the
    /// session to fill in.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.run_id = self.run_id;
        out.tick = self.world.tick();
        out.bird_y = self.world.bird().y;
        out.bird_velocity = self.world.bird().velocity;
        out.obstacles.clear();
        out.obstacles
            .extend(self.world.obstacles().iter().map(ObstacleSnapshot::from));
        out.score = self.world.score();
        out.collision = self.last_collision;
        out.config = self.config;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
