//! Hanoi Forge - Tower of Hanoi planner and replay engine
//!
//! The planner produces the optimal move sequence; a `Session` replays it
//! one move at a time (or takes manual moves) and keeps the move log that
//! front ends display.

pub mod core;
pub mod game;
pub mod pegs;
pub mod error;

pub use error::{HanoiError, Result};
