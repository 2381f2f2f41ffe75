//! Bird state - one body under constant gravity.

use crate::types::GameConfig;

/// Vertical state of the bird. `y` is the top edge of its hitbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub y: f64,
    pub velocity: f64,
}

impl Bird {
    pub fn new(y: f64, velocity: f64) -> Self {
        Self { y, velocity }
    }

    /// Bird at its start position with zero velocity.
    pub fn spawn(config: &GameConfig) -> Self {
        Self::new(config.bird_start_y(), 0.0)
    }

    /// Integrate one tick: velocity first, then position.
    ///
    /// No clamping happens here; boundaries are checked by
    /// [`crate::collision::check_collision`].
    pub fn apply_gravity(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// Overwrite velocity with the jump constant.
    ///
    /// Callers gate this on the run being active.
    pub fn apply_impulse(&mut self, jump_velocity: f64) {
        self.velocity = jump_velocity;
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self, bird_height: f64) -> f64 {
        self.y + bird_height
    }
}
