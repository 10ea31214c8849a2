//! Flappy Bird game core.
//!
//! The player steers a bird through an endless stream of gapped pipes by
//! flapping against gravity. Passing a gap scores a point; touching a pipe,
//! the ground, or the top of the screen ends the round.

pub mod logic;
pub mod physics;
pub mod scoring;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use scoring::Collision;
pub use types::*;
