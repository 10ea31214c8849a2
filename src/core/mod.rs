//! Core engine: tuning constants, fixed-rate ticking, and the session loop.

pub mod constants;
pub mod game_loop;
pub mod tick;
