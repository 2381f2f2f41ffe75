//! World - the complete simulation state and its pure tick function.
//!
//! [`World::step`] never mutates the world it is called on. It produces the
//! next world together with a [`TickOutcome`], so scoring and collision always
//! observe this tick's post-move positions and nothing half-updated.
//!
//! The per-tick order is fixed:
//!
//! 1. gravity (velocity, then position)
//! 2. advance obstacles
//! 3. retire off-screen obstacles
//! 4. spawn on the spacing threshold
//! 5. mark passed obstacles / score
//! 6. collision check

use crate::bird::Bird;
use crate::collision::check_collision;
use crate::obstacles::ObstacleStream;
use crate::rng::SimpleRng;
use crate::types::{Collision, GameConfig};

/// Everything that happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Obstacles that crossed the scoring line this tick.
    pub scored: u32,
    /// Whether a new obstacle entered at the right edge.
    pub spawned: bool,
    /// Obstacles removed past the left edge.
    pub retired: u32,
    /// Terminal condition, if any.
    pub collision: Option<Collision>,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        self.collision.is_some()
    }
}

/// Result of [`World::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub world: World,
    pub outcome: TickOutcome,
}

#[derive(Debug, PartialEq)]
pub struct World {
    bird: Bird,
    obstacles: ObstacleStream,
    score: u32,
    rng: SimpleRng,
    tick: u64,
}

impl Clone for World {
    fn clone(&self) -> Self {
        Self {
            bird: self.bird,
            obstacles: self.obstacles.clone(),
            score: self.score,
            rng: self.rng,
            tick: self.tick,
        }
    }

    // Field-wise so `step_into` keeps the obstacle buffer.
    fn clone_from(&mut self, source: &Self) {
        self.bird = source.bird;
        self.obstacles.clone_from(&source.obstacles);
        self.score = source.score;
        self.rng = source.rng;
        self.tick = source.tick;
    }
}

impl World {
    /// Fresh run: bird at the start position, one obstacle at the right edge.
    pub fn new(config: &GameConfig, mut rng: SimpleRng) -> Self {
        let mut obstacles = ObstacleStream::new();
        obstacles.reset(config, &mut rng);
        Self {
            bird: Bird::spawn(config),
            obstacles,
            score: 0,
            rng,
            tick: 0,
        }
    }

    /// Assemble a world from parts (tests, replays).
    pub fn from_parts(bird: Bird, obstacles: ObstacleStream, score: u32, rng: SimpleRng) -> Self {
        Self {
            bird,
            obstacles,
            score,
            rng,
            tick: 0,
        }
    }

    /// Compute the next world.
    pub fn step(&self, config: &GameConfig) -> Step {
        let mut world = self.clone();
        let outcome = self.step_into(config, &mut world);
        Step { world, outcome }
    }

    /// Compute the next world into `out`, reusing its allocations.
    ///
    /// `out` is overwritten completely; `self` is left untouched.
    pub fn step_into(&self, config: &GameConfig, out: &mut World) -> TickOutcome {
        out.clone_from(self);
        out.tick = out.tick.wrapping_add(1);

        out.bird.apply_gravity(config.gravity);

        out.obstacles.advance(config.obstacle_speed);
        let retired = out.obstacles.retire_offscreen(config.obstacle_width) as u32;
        let spawned = out.obstacles.maybe_spawn(config, &mut out.rng);

        let scored = out
            .obstacles
            .mark_passed(config.bird_center_x(), config.obstacle_width);
        out.score = out.score.saturating_add(scored);

        let collision = check_collision(&out.bird, out.obstacles.as_slice(), config);

        TickOutcome {
            scored,
            spawned,
            retired,
            collision,
        }
    }

    /// Apply a flap between ticks. Only velocity changes.
    pub fn apply_impulse(&mut self, config: &GameConfig) {
        self.bird.apply_impulse(config.jump_velocity);
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn obstacles(&self) -> &ObstacleStream {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rng(&self) -> SimpleRng {
        self.rng
    }

    /// Ticks simulated since this world was created.
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacles::Obstacle;

    #[test]
    fn test_new_world() {
        let cfg = GameConfig::default();
        let world = World::new(&cfg, SimpleRng::new(42));

        assert_eq!(world.bird().y, cfg.bird_start_y());
        assert_eq!(world.bird().velocity, 0.0);
        assert_eq!(world.obstacles().len(), 1);
        assert_eq!(world.score(), 0);
        assert_eq!(world.tick(), 0);
    }

    #[test]
    fn test_step_leaves_previous_world_untouched() {
        let cfg = GameConfig::default();
        let world = World::new(&cfg, SimpleRng::new(42));
        let before = world.clone();

        let step = world.step(&cfg);

        assert_eq!(world, before);
        assert_ne!(step.world, before);
        assert_eq!(step.world.tick(), 1);
    }

    #[test]
    fn test_step_is_deterministic() {
        let cfg = GameConfig::default();
        let mut a = World::new(&cfg, SimpleRng::new(9));
        let mut b = World::new(&cfg, SimpleRng::new(9));
        for _ in 0..200 {
            a = a.step(&cfg).world;
            b = b.step(&cfg).world;
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_step_into_matches_step() {
        let cfg = GameConfig::default();
        let world = World::new(&cfg, SimpleRng::new(5));
        let mut scratch = World::new(&cfg, SimpleRng::new(77));

        let outcome = world.step_into(&cfg, &mut scratch);
        let step = world.step(&cfg);

        assert_eq!(outcome, step.outcome);
        assert_eq!(scratch, step.world);
    }

    #[test]
    fn test_scoring_and_collision_see_post_move_positions() {
        let cfg = GameConfig::default();
        // Trailing edge is 202 before the move and 197 after it.
        let world = World::from_parts(
            Bird::new(100.0, 0.0),
            [Obstacle::new(152.0, 0.0)].into_iter().collect(),
            0,
            SimpleRng::new(1),
        );

        let step = world.step(&cfg);

        assert_eq!(step.outcome.scored, 1);
        assert_eq!(step.world.score(), 1);
        // Gap [0, 300) holds the bird at 101.5..165.5.
        assert_eq!(step.outcome.collision, None);
        assert!(!step.outcome.spawned);
    }
}
