//! Game state machine for a flappy session.
//!
//! Phases move `Idle → Flying → GameOver`, then back to `Flying` on restart
//! or out of the loop on quit. Inputs with no meaning in the current phase
//! are ignored.

use super::physics;
use super::scoring::{detect_collision, update_pass_latch, Collision};
use super::spawner::maybe_spawn;
use super::types::{Phase, Session};
use rand::Rng;
use tracing::info;

/// Discrete inputs the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Primary pointer (or flap key) went down.
    PointerDown,
    /// Primary pointer went up.
    PointerUp,
    /// Restart button on the game-over screen.
    Restart,
    /// Quit button on the game-over screen.
    Quit,
    /// Window close or interrupt; honoured in every phase.
    QuitRequested,
}

/// Whether the session loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Collision observed this tick, if any.
    pub collision: Option<Collision>,
    /// The round ended this tick (Flying → GameOver).
    pub round_over: bool,
    /// A gap was credited this tick.
    pub scored: bool,
    /// A new pipe pair entered this tick.
    pub spawned: bool,
}

/// Apply a single input event to the session.
pub fn process_input(session: &mut Session, input: GameInput) -> Control {
    match input {
        GameInput::PointerDown => {
            if session.phase == Phase::GameOver {
                return Control::Continue;
            }
            physics::press(&mut session.bird);
            if session.phase == Phase::Idle {
                session.phase = Phase::Flying;
                session.airborne = true;
                info!("first flap, round started");
            }
        }
        GameInput::PointerUp => {
            // Tracks the physical pointer, so it applies in every phase
            physics::release(&mut session.bird);
        }
        GameInput::Restart => {
            if session.phase == Phase::GameOver {
                session.restart();
                info!(high_score = session.high_score, "round restarted");
            }
        }
        GameInput::Quit => {
            if session.phase == Phase::GameOver {
                return Control::Exit;
            }
        }
        GameInput::QuitRequested => return Control::Exit,
    }
    Control::Continue
}

/// Run one fixed-rate tick.
///
/// Order: bird physics, scrolling, collision, then (only while flying) the
/// score latch and the spawner. Scoring reads the pipes as they stand after
/// this tick's scroll and before any new pair is added.
pub fn process_tick<R: Rng>(session: &mut Session, now_ms: u64, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();

    if session.airborne {
        physics::update_bird(&mut session.bird);
    }
    physics::scroll_pipes(&mut session.pipes);
    physics::scroll_ground(&mut session.ground_scroll);

    result.collision = detect_collision(session);
    if let Some(collision) = result.collision {
        if collision == Collision::Ground {
            session.airborne = false;
        }
        if session.phase == Phase::Flying {
            session.phase = Phase::GameOver;
            session.pass_pipe = false;
            result.round_over = true;
            info!(?collision, score = session.score, "round over");
        }
    }

    if session.phase == Phase::Flying {
        result.scored = update_pass_latch(session);
        result.spawned = maybe_spawn(session, now_ms, rng);
    }

    result
}
