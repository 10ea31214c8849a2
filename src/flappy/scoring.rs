//! Collision detection and the pass-through score latch.

use super::types::Session;
use crate::core::constants::GROUND_Y;
use tracing::debug;

/// What the bird ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Bottom edge reached the ground line. Also grounds the bird.
    Ground,
    /// Overlapped a pipe segment.
    Pipe,
    /// Top edge went above the screen.
    Ceiling,
}

/// Check the bird against the ground, every live pipe, and the ceiling.
///
/// Ground contact wins when several apply, since it is the only one that
/// also stops bird physics.
pub fn detect_collision(session: &Session) -> Option<Collision> {
    let bird = session.bird.hitbox();

    if bird.bottom() >= GROUND_Y {
        return Some(Collision::Ground);
    }

    let hit_pipe = session
        .pipes
        .iter()
        .flat_map(|pair| pair.segments())
        .any(|pipe| pipe.hitbox().intersects(&bird));
    if hit_pipe {
        return Some(Collision::Pipe);
    }

    if bird.top() < 0 {
        return Some(Collision::Ceiling);
    }

    None
}

/// Advance the two-stage pass latch against the nearest pipe pair.
///
/// The latch arms while the bird is fully inside the pair's horizontal span
/// and pays out once the bird's left edge clears the pair's right edge, so
/// each gap credits exactly one point. Returns whether the score went up.
pub fn update_pass_latch(session: &mut Session) -> bool {
    let Some(nearest) = session.pipes.first() else {
        return false;
    };
    let bird = session.bird.hitbox();

    if !session.pass_pipe && bird.left() > nearest.left() && bird.right() < nearest.right() {
        session.pass_pipe = true;
    }

    if session.pass_pipe && bird.left() > nearest.right() {
        session.score += 1;
        session.pass_pipe = false;
        debug!(score = session.score, "passed pipe");
        return true;
    }

    false
}
