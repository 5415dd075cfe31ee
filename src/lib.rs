//! Torus Snake - the classic Snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, apple and the tick engine
//! - Keyboard mapping and per-tick input buffering (input module)
//! - TUI rendering (render module)
//! - Session counters (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
