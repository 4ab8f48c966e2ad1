// Grid: the cell size is derived from the view each frame
// (min(width, height) / GRID_DIVISOR), so the board follows a resize without
// renormalising in-flight positions.
pub const GRID_DIVISOR: f32 = 20.0;

// Pacing. `speed` is the tick-rate parameter: the step gate fires when more
// than 1000 / (speed / 10) ms have elapsed since the last tick.
pub const INITIAL_SPEED: f32 = 50.0;
pub const SPEED_GROWTH: f32 = 1.1;
// One ramp per this many food eaten.
pub const SPEED_RAMP_EVERY: u32 = 5;

// Food-wave animation: ticks per segment, and the scale bounds the pulse
// moves between.
pub const ANIMATION_PERIOD: u32 = 2;
pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 1.5;

// FFP penalty card
pub const FFP_SPAWN_INTERVAL_MS: f64 = 12_000.0;
pub const FFP_PENALTY_FACTOR: f32 = 0.5;
pub const FFP_PLACE_MAX_ATTEMPTS: usize = 20_000;

// Each food item is a five pound note.
pub const POUNDS_PER_FOOD: u32 = 5;

// Pitch markings (in grid units)
pub const PENALTY_AREA_WIDTH: i32 = 6;
pub const PENALTY_AREA_HEIGHT: i32 = 14;
pub const CENTER_CIRCLE_RADIUS: i32 = 3;

// On-screen direction pad (touch)
pub const UI_PAD_MARGIN: f32 = 120.0;
pub const UI_PAD_SPREAD: f32 = 72.0;
pub const UI_PAD_RADIUS: f32 = 34.0;
