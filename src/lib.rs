//! Flappy - terminal Flappy Bird with per-player high scores.
//!
//! The library holds the game core, the score store, and the terminal
//! screens; `main.rs` wires them to a real-time loop.

pub mod config;
pub mod core;
pub mod flappy;
pub mod input;
pub mod scores;
pub mod ui;
pub mod utils;

pub use crate::core::game_loop::GameLoop;
pub use crate::core::tick::Ticker;
pub use flappy::{Control, GameInput, Phase, Session, TickResult};
pub use scores::{JsonScoreStore, MemoryScoreStore, ScoreStore, StoreError};
