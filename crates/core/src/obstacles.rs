//! Obstacle stream - spawning, scrolling, retirement and pass tracking
//!
//! Obstacles are kept oldest first. New obstacles always enter at the right
//! edge of the field, and all obstacles scroll by the same amount each tick, so
//! the stream stays sorted by `x` without any re-ordering.
//!
//! Spawning is driven by distance, not by a timer: a new obstacle appears as
//! soon as the newest one has scrolled strictly past
//! [`GameConfig::spawn_threshold_x`]. With a fixed speed and spacing this makes
//! the gap between consecutive obstacles identical for the whole run.

use crate::rng::SimpleRng;
use crate::types::GameConfig;

/// An upper/lower body pair with a gap between them.
///
/// The upper body covers `[0, gap_height)`, the lower body
/// `[gap_height + gap_size, field_height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    /// Top edge of the gap.
    pub gap_height: f64,
    /// Set once the trailing edge has crossed the scoring line.
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_height: f64) -> Self {
        Self {
            x,
            gap_height,
            passed: false,
        }
    }

    /// Trailing (right) edge.
    pub fn right(&self, width: f64) -> f64 {
        self.x + width
    }

    /// Bottom edge of the gap (top of the lower body).
    pub fn gap_bottom(&self, gap_size: f64) -> f64 {
        self.gap_height + gap_size
    }

    /// Strict horizontal overlap with `[left, right]`.
    pub fn overlaps_x(&self, width: f64, left: f64, right: f64) -> bool {
        right > self.x && left < self.right(width)
    }

    pub fn is_offscreen(&self, width: f64) -> bool {
        self.right(width) <= 0.0
    }
}

/// Ordered sequence of live obstacles, oldest first.
#[derive(Debug, Default, PartialEq)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
}

impl Clone for ObstacleStream {
    fn clone(&self) -> Self {
        Self {
            obstacles: self.obstacles.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.obstacles.clone_from(&source.obstacles);
    }
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the stream and place the single initial obstacle at the right edge.
    pub fn reset(&mut self, config: &GameConfig, rng: &mut SimpleRng) {
        self.obstacles.clear();
        self.spawn(config, rng);
    }

    /// Scroll every obstacle left by `speed`.
    pub fn advance(&mut self, speed: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }
    }

    /// Drop obstacles that are fully past the left edge. Returns how many were removed.
    pub fn retire_offscreen(&mut self, width: f64) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen(width));
        before - self.obstacles.len()
    }

    /// Whether the spacing threshold has been crossed (or the stream is empty).
    pub fn should_spawn(&self, config: &GameConfig) -> bool {
        match self.newest() {
            None => true,
            Some(newest) => newest.x < config.spawn_threshold_x(),
        }
    }

    /// Append a new obstacle if [`ObstacleStream::should_spawn`]. Returns whether one was added.
    pub fn maybe_spawn(&mut self, config: &GameConfig, rng: &mut SimpleRng) -> bool {
        if !self.should_spawn(config) {
            return false;
        }
        self.spawn(config, rng);
        true
    }

    fn spawn(&mut self, config: &GameConfig, rng: &mut SimpleRng) {
        let gap_height = rng.next_below(config.max_gap_height());
        self.obstacles
            .push(Obstacle::new(config.field_width, gap_height));
    }

    /// Mark obstacles whose trailing edge is strictly left of `bird_center_x`.
    ///
    /// The `passed` flag is the only guard, so each obstacle contributes at most
    /// one point no matter how many ticks it spends beyond the line. Returns
    /// the number of newly passed obstacles.
    pub fn mark_passed(&mut self, bird_center_x: f64, width: f64) -> u32 {
        let mut newly_passed = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.right(width) < bird_center_x {
                obstacle.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    /// Most recently spawned obstacle.
    pub fn newest(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl FromIterator<Obstacle> for ObstacleStream {
    /// Build a stream from obstacles already in spawn order (oldest first).
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        Self {
            obstacles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ObstacleStream {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}
