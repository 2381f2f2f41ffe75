//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation: bird physics, the obstacle stream,
//! collision and scoring, and the run lifecycle. It has **zero dependencies** on
//! UI, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical runs
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free per tick**: `World::step_into` reuses a scratch world
//!
//! # Module Structure
//!
//! - [`bird`]: vertical position/velocity under gravity and impulse
//! - [`obstacles`]: spawn/advance/retire and pass tracking
//! - [`collision`]: ground, ceiling and obstacle body checks
//! - [`world`]: the pure per-tick step
//! - [`game_state`]: run controller (`Idle → Ready → Active → Over`)
//! - [`clock`]: fixed-timestep accumulator
//! - [`rng`]: seeded LCG for gap heights
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::GameState;
//! use tui_flappy_types::{GameAction, GameConfig, RunPhase};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//! game.apply_action(GameAction::Start);
//!
//! game.tick();
//! game.apply_action(GameAction::Flap);
//! game.tick();
//!
//! assert_eq!(game.phase(), RunPhase::Active);
//! assert!(game.bird().velocity < 0.0);
//! ```
//!
//! # Timing
//!
//! One call to [`GameState::tick`](game_state::GameState::tick) is one fixed
//! step of [`TICK_MS`](tui_flappy_types::TICK_MS) milliseconds. Drive it with
//! [`FixedStep`] rather than from a render callback.

pub mod bird;
pub mod clock;
pub mod collision;
pub mod game_state;
pub mod obstacles;
pub mod rng;
pub mod snapshot;
pub mod world;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use clock::FixedStep;
pub use collision::check_collision;
pub use game_state::GameState;
pub use obstacles::{Obstacle, ObstacleStream};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, ObstacleSnapshot};
pub use world::{Step, TickOutcome, World};
