//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The board is a torus: the snake leaves one edge and comes back on the opposite one,
//! so the only way to lose is to run into itself.

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use apple::Apple;
pub use config::{ConfigError, GameConfig, InputPolicy};
pub use engine::{GameEngine, StepResult, TickOutcome};
pub use grid::{Cell, Grid};
pub use snake::{Advance, Snake};
pub use state::{GameState, LoopState};
