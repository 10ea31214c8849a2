//! Score persistence: a file-backed map from player name to high score and
//! round history.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{JsonScoreStore, MemoryScoreStore, PlayerRecord, ScoreBook, ScoreStore};
