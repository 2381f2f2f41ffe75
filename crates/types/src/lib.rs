//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, session, terminal rendering).
//!
//! # Play Field
//!
//! The field is measured in abstract "field units" (the reference tuning uses
//! phone-screen pixels). `y` grows downwards; `x` grows to the right.
//!
//! - **Width**: 400 units
//! - **Height**: 800 units, the bottom 80 of which are the ground band
//! - **Bird**: 50x64, horizontally centered, starts at `y = height / 2`
//!
//! # Physics Constants
//!
//! All per-tick values assume the fixed [`TICK_MS`] step:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 Hz) |
//! | `GRAVITY` | 1.5 | Velocity added every tick |
//! | `JUMP_VELOCITY` | -15 | Velocity set by a flap |
//! | `OBSTACLE_SPEED` | 5 | Leftward scroll per tick |
//! | `OBSTACLE_WIDTH` | 50 | Width of an obstacle |
//! | `GAP_SIZE` | 300 | Vertical opening between the bodies |
//! | `GAP_MARGIN` | 100 | Keeps the gap clear of the ground band |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{GameAction, GameConfig, RunPhase};
//!
//! let cfg = GameConfig::default();
//! assert_eq!(cfg.bird_center_x(), 200.0);
//! assert!(cfg.start_gate);
//! assert!(!cfg.ceiling_collision);
//!
//! assert_eq!(GameAction::from_str("flap"), Some(GameAction::Flap));
//! assert!(RunPhase::Over.accepts_start());
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 ticks per second)
pub const TICK_MS: u32 = 16;

/// Play field width in field units
pub const FIELD_WIDTH: f64 = 400.0;

/// Play field height in field units (ground band included)
pub const FIELD_HEIGHT: f64 = 800.0;

/// Height of the ground band at the bottom of the field
pub const GROUND_HEIGHT: f64 = 80.0;

/// Velocity added to the bird every tick (positive = downward)
pub const GRAVITY: f64 = 1.5;

/// Velocity the bird is set to on a flap
pub const JUMP_VELOCITY: f64 = -15.0;

/// Bird hitbox width
pub const BIRD_WIDTH: f64 = 50.0;

/// Bird hitbox height
pub const BIRD_HEIGHT: f64 = 64.0;

/// Obstacle body width
pub const OBSTACLE_WIDTH: f64 = 50.0;

/// Vertical opening between the upper and lower obstacle bodies
pub const GAP_SIZE: f64 = 300.0;

/// Leftward scroll per tick
pub const OBSTACLE_SPEED: f64 = 5.0;

/// Extra room kept below the gap when drawing its height
pub const GAP_MARGIN: f64 = 100.0;

/// Ratio of field width to spawn spacing.
pub const SPAWN_SPACING_DIVISOR: f64 = 1.5;

/// Key under which the high score is persisted.
pub const HIGH_SCORE_KEY: &str = "highScore";

/// Gameplay tuning for one session.
///
/// The defaults reproduce the reference tuning. Only `start_gate` and
/// `ceiling_collision` are expected to change at runtime; the geometric values
/// are exposed so tests can build small, predictable fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub ground_height: f64,
    pub gravity: f64,
    pub jump_velocity: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub obstacle_width: f64,
    pub gap_size: f64,
    pub gap_margin: f64,
    pub obstacle_speed: f64,
    pub spawn_spacing: f64,
    /// Require an explicit start action before the first run.
    pub start_gate: bool,
    /// End the run when the bird leaves the top of the field.
    pub ceiling_collision: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            gap_margin: GAP_MARGIN,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_spacing: FIELD_WIDTH / SPAWN_SPACING_DIVISOR,
            start_gate: true,
            ceiling_collision: false,
        }
    }
}

impl GameConfig {
    /// Fixed horizontal center of the bird (the scoring line).
    pub fn bird_center_x(&self) -> f64 {
        self.field_width / 2.0
    }

    pub fn bird_left(&self) -> f64 {
        self.bird_center_x() - self.bird_width / 2.0
    }

    pub fn bird_right(&self) -> f64 {
        self.bird_center_x() + self.bird_width / 2.0
    }

    /// Bird top edge at the start of a run.
    pub fn bird_start_y(&self) -> f64 {
        self.field_height / 2.0
    }

    /// Top edge of the ground band.
    pub fn ground_top(&self) -> f64 {
        self.field_height - self.ground_height
    }

    /// Exclusive upper bound for a spawned obstacle's gap height.
    pub fn max_gap_height(&self) -> f64 {
        (self.field_height - self.gap_size - self.gap_margin).max(0.0)
    }

    /// `x` the newest obstacle must pass (strictly) before the next spawns.
    pub fn spawn_threshold_x(&self) -> f64 {
        self.field_width - self.spawn_spacing
    }
}

/// Lifecycle of a run.
///
/// `Idle → Ready → Active → Over → Active → ...`; `Ready` only appears when the
/// start gate is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunPhase {
    /// Nothing has been started yet.
    #[default]
    Idle,
    /// Waiting behind the start gate.
    Ready,
    /// Simulation running.
    Active,
    /// Terminal until restarted.
    Over,
}

impl RunPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, RunPhase::Active)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, RunPhase::Over)
    }

    /// Whether a start/restart action begins a new run from this phase.
    pub fn accepts_start(&self) -> bool {
        !self.is_active()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Ready => "ready",
            RunPhase::Active => "active",
            RunPhase::Over => "over",
        }
    }
}

/// Player-facing actions delivered to the run controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Upward impulse; ignored unless a run is active
    Flap,
    /// Begin the first run (from idle or the start gate)
    Start,
    /// Begin a new run after game over
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flappy_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("Flap"), Some(GameAction::Flap));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flap" => Some(GameAction::Flap),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Flap => "flap",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// Reason a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Bird bottom reached the ground band.
    Ground,
    /// Bird left the top of the field (only with `ceiling_collision`).
    Ceiling,
    /// Bird hit the body of the obstacle at this stream index.
    Obstacle { index: usize },
}
