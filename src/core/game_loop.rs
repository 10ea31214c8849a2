//! Session orchestration: the game state machine plus score persistence.
//!
//! [`GameLoop`] owns the [`Session`] for one player and the score store it
//! reports to. The store is touched at exactly two points: one read when the
//! session starts and one read-modify-write each time a round ends.

use crate::flappy::logic::{process_input, process_tick, Control, GameInput, TickResult};
use crate::flappy::types::Session;
use crate::scores::{ScoreStore, StoreError};
use rand::Rng;
use tracing::{error, info, warn};

/// One player's play session.
#[derive(Debug)]
pub struct GameLoop<S: ScoreStore> {
    session: Session,
    store: S,
    player: String,
    /// Last store problem worth showing to the player.
    notice: Option<String>,
}

impl<S: ScoreStore> GameLoop<S> {
    /// Start a session, failing if the player's high score cannot be read.
    pub fn start(player: impl Into<String>, store: S) -> Result<Self, StoreError> {
        let player = player.into();
        let high_score = store.high_score(&player)?;
        info!(%player, high_score, "session started");
        Ok(Self {
            session: Session::new(high_score),
            store,
            player,
            notice: None,
        })
    }

    /// Start a session, falling back to a high score of 0 if the store
    /// cannot be read. The failure is logged and kept as a notice.
    pub fn start_or_default(player: impl Into<String>, store: S) -> Self {
        let player = player.into();
        match store.high_score(&player) {
            Ok(high_score) => {
                info!(%player, high_score, "session started");
                Self {
                    session: Session::new(high_score),
                    store,
                    player,
                    notice: None,
                }
            }
            Err(e) => {
                warn!(%player, error = %e, "could not load scores, starting from 0");
                Self {
                    session: Session::new(0),
                    store,
                    player,
                    notice: Some(format!("Scores unavailable: {e}")),
                }
            }
        }
    }

    pub fn handle_input(&mut self, input: GameInput) -> Control {
        let control = process_input(&mut self.session, input);
        if control == Control::Exit {
            info!(player = %self.player, "session ended");
        }
        control
    }

    /// Run one tick and persist the score if the round ended.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> TickResult {
        let result = process_tick(&mut self.session, now_ms, rng);
        if result.round_over {
            self.record_round();
        }
        result
    }

    fn record_round(&mut self) {
        let score = self.session.score;
        match self.store.update_score(&self.player, score) {
            Ok(high_score) => {
                info!(player = %self.player, score, high_score, "round recorded");
                self.session.high_score = high_score;
                self.notice = None;
            }
            Err(e) => {
                error!(player = %self.player, score, error = %e, "failed to record round");
                self.session.high_score = self.session.high_score.max(score);
                self.notice = Some(format!("Score not saved: {e}"));
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
