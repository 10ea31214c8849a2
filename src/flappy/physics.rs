//! Per-tick motion: bird gravity, flap impulse, and horizontal scrolling.

use super::types::{Bird, PipePair};
use crate::core::constants::{
    FLAP_VELOCITY, GRAVITY, GROUND_WRAP, GROUND_Y, MAX_FALL_SPEED, SCROLL_SPEED,
};

/// Apply one tick of gravity to the bird.
///
/// Velocity is clamped to the maximum fall speed. The bird only moves while
/// its bottom edge is above the ground line, so a falling bird comes to rest
/// instead of sinking through the floor.
pub fn update_bird(bird: &mut Bird) {
    bird.velocity = (bird.velocity + GRAVITY).min(MAX_FALL_SPEED);
    if bird.hitbox().bottom() < GROUND_Y {
        bird.y += bird.velocity.floor() as i32;
    }
}

/// Handle a pointer press. Returns true if it produced a flap.
///
/// Only the first press after a release flaps; holding the pointer does not
/// repeat. The flap replaces the current velocity outright.
pub fn press(bird: &mut Bird) -> bool {
    if bird.flap_latched {
        return false;
    }
    bird.flap_latched = true;
    bird.velocity = FLAP_VELOCITY;
    true
}

/// Handle a pointer release, re-arming the flap.
pub fn release(bird: &mut Bird) {
    bird.flap_latched = false;
}

/// Shift every pipe left and drop the ones that have left the screen.
///
/// Removal preserves spawn order, so the nearest pair stays at index 0.
pub fn scroll_pipes(pipes: &mut Vec<PipePair>) {
    for pair in pipes.iter_mut() {
        pair.x -= SCROLL_SPEED;
    }
    pipes.retain(|pair| !pair.is_off_screen());
}

/// Advance the ground tile offset, wrapping for a seamless loop.
pub fn scroll_ground(offset: &mut i32) {
    *offset -= SCROLL_SPEED;
    if offset.abs() > GROUND_WRAP {
        *offset = 0;
    }
}
