// Screen and world geometry (pixels)
pub const SCREEN_WIDTH: i32 = 864;
pub const SCREEN_HEIGHT: i32 = 936;
pub const GROUND_Y: i32 = 768;

// Tick and timing
pub const TICKS_PER_SECOND: u32 = 60;
pub const MAX_CATCH_UP_TICKS: u32 = 5;

// Bird
pub const BIRD_LANE_X: i32 = 100;
pub const BIRD_SPAWN_Y: i32 = SCREEN_HEIGHT / 2;
pub const BIRD_WIDTH: i32 = 51;
pub const BIRD_HEIGHT: i32 = 36;
pub const GRAVITY: f64 = 0.5;
pub const MAX_FALL_SPEED: f64 = 8.0;
pub const FLAP_VELOCITY: f64 = -10.0;

// Scrolling
pub const SCROLL_SPEED: i32 = 6;
pub const GROUND_WRAP: i32 = 35;
/// Distance the ground travels between offset resets. Stripes repeat on
/// this period so a reset lands on an identical picture.
pub const GROUND_TILE: i32 = (GROUND_WRAP / SCROLL_SPEED + 1) * SCROLL_SPEED;

// Pipes
pub const PIPE_WIDTH: i32 = 78;
pub const PIPE_HEIGHT: i32 = 568;
pub const PIPE_GAP: i32 = 200;
pub const PIPE_OFFSET_RANGE: i32 = 100;
pub const PIPE_FREQUENCY_MS: u64 = 1500;
