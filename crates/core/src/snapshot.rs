use crate::obstacles::Obstacle;
use crate::types::{Collision, GameConfig, RunPhase};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSnapshot {
    pub x: f64,
    pub gap_height: f64,
    pub passed: bool,
}

impl ObstacleSnapshot {
    /// Top edge of the lower obstacle body.
    pub fn gap_bottom(&self, gap_size: f64) -> f64 {
        self.gap_height + gap_size
    }
}

impl From<&Obstacle> for ObstacleSnapshot {
    fn from(value: &Obstacle) -> Self {
        Self {
            x: value.x,
            gap_height: value.gap_height,
            passed: value.passed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub phase: RunPhase,
    pub run_id: u32,
    pub tick: u64,
    pub bird_y: f64,
    pub bird_velocity: f64,
    /// Oldest first.
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: u32,
    pub high_score: u32,
    /// The last finished run set a new high score.
    pub new_best: bool,
    pub collision: Option<Collision>,
    pub config: GameConfig,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.phase = RunPhase::Idle;
        self.run_id = 0;
        self.tick = 0;
        self.bird_y = 0.0;
        self.bird_velocity = 0.0;
        self.obstacles.clear();
        self.score = 0;
        self.high_score = 0;
        self.new_best = false;
        self.collision = None;
        self.config = GameConfig::default();
    }

    /// Nothing moves between ticks (start gate, game over, idle).
    pub fn is_static(&self) -> bool {
        !self.phase.is_active()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            phase: RunPhase::Idle,
            run_id: 0,
            tick: 0,
            bird_y: 0.0,
            bird_velocity: 0.0,
            obstacles: Vec::with_capacity(8),
            score: 0,
            high_score: 0,
            new_best: false,
            collision: None,
            config: GameConfig::default(),
        };
        s.clear();
        s
    }
}
