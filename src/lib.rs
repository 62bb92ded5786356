//! Deterministic grid snake.
//!
//! The engine ([`game`], [`food`], [`rng`], [`snake`]) is a set of pure
//! transitions over immutable [`game::GameState`] snapshots. The remaining
//! modules are the terminal front end that schedules ticks, reads keys and
//! draws frames.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod rng;
pub mod script;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

pub use config::Config;
pub use food::place_food;
pub use game::{DeathReason, GameState, GameStatus};
pub use input::Direction;
pub use rng::{Lcg, RandomSource};
pub use snake::{Snake, Vector2};
