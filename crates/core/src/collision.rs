//! Collision detection against the ground band, the ceiling and obstacle bodies.
//!
//! All checks are axis-aligned rectangle tests in field units. The bird's
//! horizontal extent never changes, so only obstacles overlapping it on the x
//! axis need a vertical check.

use crate::bird::Bird;
use crate::obstacles::Obstacle;
use crate::types::{Collision, GameConfig};

/// Bird bottom at or below the top of the ground band.
pub fn hits_ground(bird: &Bird, config: &GameConfig) -> bool {
    bird.bottom(config.bird_height) >= config.ground_top()
}

/// Bird top above the field. Only consulted when `ceiling_collision` is set.
pub fn hits_ceiling(bird: &Bird) -> bool {
    bird.top() < 0.0
}

/// Bird outside the gap of an obstacle it overlaps horizontally.
pub fn hits_obstacle(bird: &Bird, obstacle: &Obstacle, config: &GameConfig) -> bool {
    if !obstacle.overlaps_x(config.obstacle_width, config.bird_left(), config.bird_right()) {
        return false;
    }

    let hits_upper = bird.top() < obstacle.gap_height;
    let hits_lower = bird.bottom(config.bird_height) > obstacle.gap_bottom(config.gap_size);
    hits_upper || hits_lower
}

/// Evaluate every terminal condition for the current positions.
///
/// Ground wins over obstacles when both apply on the same tick.
pub fn check_collision(
    bird: &Bird,
    obstacles: &[Obstacle],
    config: &GameConfig,
) -> Option<Collision> {
    if hits_ground(bird, config) {
        return Some(Collision::Ground);
    }

    if config.ceiling_collision && hits_ceiling(bird) {
        return Some(Collision::Ceiling);
    }

    obstacles
        .iter()
        .position(|o| hits_obstacle(bird, o, config))
        .map(|index| Collision::Obstacle { index })
}
