//! Flappy Bird data structures.
//!
//! Plain records for the player bird, the scrolling pipe pairs, and the
//! session aggregate that owns them. Coordinates are screen pixels with the
//! origin at the top-left corner and `y` growing downward.

use crate::core::constants::{
    BIRD_HEIGHT, BIRD_LANE_X, BIRD_SPAWN_Y, BIRD_WIDTH, PIPE_GAP, PIPE_HEIGHT, PIPE_WIDTH,
};

/// Axis-aligned bounding box in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Hitbox {
    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether a (possibly fractional) point lies inside the box.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.left() as f64
            && px < self.right() as f64
            && py >= self.top() as f64
            && py < self.bottom() as f64
    }
}

/// The player-controlled bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Left edge. Constant for the lifetime of the bird.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Vertical velocity in pixels/tick (positive = downward).
    pub velocity: f64,
    /// Set when a press has produced a flap; cleared on release.
    pub flap_latched: bool,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_LANE_X,
            y: BIRD_SPAWN_Y,
            velocity: 0.0,
            flap_latched: false,
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            x: self.x,
            y: self.y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
        }
    }

    /// Return to the spawn position at rest. The latch tracks the physical
    /// pointer and is left alone.
    pub fn reset(&mut self) {
        self.x = BIRD_LANE_X;
        self.y = BIRD_SPAWN_Y;
        self.velocity = 0.0;
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// Which half of a pair a pipe segment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeOrientation {
    /// Hangs from above; its bottom edge is the top of the gap.
    Top,
    /// Rises from below; its top edge is the bottom of the gap.
    Bottom,
}

/// One pipe segment, derived from its [`PipePair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe {
    pub x: i32,
    pub y: i32,
    pub orientation: PipeOrientation,
}

impl Pipe {
    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            x: self.x,
            y: self.y,
            width: PIPE_WIDTH,
            height: PIPE_HEIGHT,
        }
    }
}

/// A mirrored top/bottom obstacle sharing one gap.
///
/// Storing the pair rather than two free segments keeps both halves on the
/// same `x` and exactly half a gap away from the shared center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipePair {
    /// Left edge of both segments.
    pub x: i32,
    /// Vertical center of the gap.
    pub gap_center: i32,
}

impl PipePair {
    pub fn new(x: i32, gap_center: i32) -> Self {
        Self { x, gap_center }
    }

    pub fn top(&self) -> Pipe {
        Pipe {
            x: self.x,
            y: self.gap_center - PIPE_GAP / 2 - PIPE_HEIGHT,
            orientation: PipeOrientation::Top,
        }
    }

    pub fn bottom(&self) -> Pipe {
        Pipe {
            x: self.x,
            y: self.gap_center + PIPE_GAP / 2,
            orientation: PipeOrientation::Bottom,
        }
    }

    pub fn segments(&self) -> [Pipe; 2] {
        [self.top(), self.bottom()]
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + PIPE_WIDTH
    }

    /// True once the right edge has scrolled past the left screen boundary.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0
    }
}

/// Coarse game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first input; the bird hovers.
    Idle,
    /// Active play.
    Flying,
    /// Round over, waiting for restart or quit.
    GameOver,
}

/// Everything one play session mutates per tick.
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: Phase,
    pub bird: Bird,
    /// Live obstacles in spawn order; the first element is the nearest.
    pub pipes: Vec<PipePair>,
    pub score: u32,
    pub high_score: u32,
    /// True while the bird straddles the nearest gap without credit yet.
    pub pass_pipe: bool,
    /// Simulated time of the last spawn. `None` spawns on the next chance.
    pub last_spawn_ms: Option<u64>,
    /// Bird physics run while set. A dead bird keeps falling until it lands.
    pub airborne: bool,
    /// Horizontal offset of the ground tiles, in `(-GROUND_WRAP, 0]`.
    pub ground_scroll: i32,
}

impl Session {
    pub fn new(high_score: u32) -> Self {
        Self {
            phase: Phase::Idle,
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            high_score,
            pass_pipe: false,
            last_spawn_ms: None,
            airborne: false,
            ground_scroll: 0,
        }
    }

    /// Start a fresh round straight into flight.
    pub fn restart(&mut self) {
        self.score = 0;
        self.pipes.clear();
        self.bird.reset();
        self.pass_pipe = false;
        self.last_spawn_ms = None;
        self.airborne = true;
        self.phase = Phase::Flying;
    }
}
