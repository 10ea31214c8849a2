//! Per-player high score and history storage.

use super::error::StoreError;
use crate::utils::persistence::write_atomic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One player's record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub high_score: u32,
    /// Every finished round, oldest first.
    pub history: Vec<u32>,
}

/// All records keyed by player identity.
pub type ScoreBook = BTreeMap<String, PlayerRecord>;

/// Storage for per-player scores.
///
/// Implementors provide `load` and `save`; `update_score` is the
/// read-modify-write the game performs once per finished round.
pub trait ScoreStore {
    /// Read every record. A store that does not exist yet is empty.
    fn load(&self) -> Result<ScoreBook, StoreError>;

    /// Replace the stored records.
    fn save(&mut self, book: &ScoreBook) -> Result<(), StoreError>;

    /// High score for one player, 0 if unknown.
    fn high_score(&self, player: &str) -> Result<u32, StoreError> {
        Ok(self
            .load()?
            .get(player)
            .map(|record| record.high_score)
            .unwrap_or(0))
    }

    /// Record a finished round and return the player's new high score.
    ///
    /// The high score never decreases. Nothing is written if the load fails,
    /// so an unreadable store is never overwritten.
    fn update_score(&mut self, player: &str, round_score: u32) -> Result<u32, StoreError> {
        let mut book = self.load()?;
        let record = book.entry(player.to_string()).or_default();
        record.history.push(round_score);
        record.high_score = record.high_score.max(round_score);
        let high_score = record.high_score;
        self.save(&book)?;
        Ok(high_score)
    }
}

/// Score store backed by a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> Result<ScoreBook, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no score file yet");
                return Ok(ScoreBook::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, book: &ScoreBook) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(book)?;
        write_atomic(&self.path, &json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), players = book.len(), "saved scores");
        Ok(())
    }
}

/// Score store held in memory. Writes can be made to fail on demand.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    book: ScoreBook,
    fail_writes: bool,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: ScoreBook) -> Self {
        Self {
            book,
            fail_writes: false,
        }
    }

    /// Make every subsequent `save` fail with a write error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn book(&self) -> &ScoreBook {
        &self.book
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<ScoreBook, StoreError> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &ScoreBook) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        self.book = book.clone();
        Ok(())
    }
}
