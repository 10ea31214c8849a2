//! Timed obstacle generation.

use super::types::{Phase, PipePair, Session};
use crate::core::constants::{PIPE_FREQUENCY_MS, PIPE_OFFSET_RANGE, SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::Rng;
use tracing::debug;

/// Spawn a pipe pair at the right screen edge if the interval has elapsed.
///
/// Only runs while flying. Evaluated once per tick, so a long gap between
/// ticks yields a single pair rather than a catch-up burst. Returns whether
/// a pair was spawned.
pub fn maybe_spawn<R: Rng>(session: &mut Session, now_ms: u64, rng: &mut R) -> bool {
    if session.phase != Phase::Flying {
        return false;
    }

    let due = match session.last_spawn_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) > PIPE_FREQUENCY_MS,
    };
    if !due {
        return false;
    }

    let offset = rng.gen_range(-PIPE_OFFSET_RANGE..=PIPE_OFFSET_RANGE);
    let pair = PipePair::new(SCREEN_WIDTH, SCREEN_HEIGHT / 2 + offset);
    debug!(gap_center = pair.gap_center, now_ms, "spawned pipe pair");
    session.pipes.push(pair);
    session.last_spawn_ms = Some(now_ms);
    true
}
