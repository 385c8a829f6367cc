//! Simulation constants and tuning parameters.
//!
//! All magnitudes are calibrated against the fixed tick rate: movement is
//! pixels-per-tick, timers are tick counts. Gameplay-facing values here are
//! defaults for `GameConfig`; code should read them through the config.

/// Simulation tick rate (Hz). One tick per display frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Grid ---

/// Grid cell size in pixels.
pub const CELL_SIZE: f64 = 60.0;

/// Grid width in cells (900 px canvas).
pub const GRID_COLS: u32 = 15;

/// Grid height in cells (600 px canvas).
pub const GRID_ROWS: u32 = 10;

// --- Economy ---

/// Starting funds.
pub const STARTING_MONEY: u32 = 200;

/// Currency awarded per enemy kill.
pub const KILL_REWARD: u32 = 10;

/// Score awarded per enemy kill.
pub const KILL_SCORE: u64 = 1000;

/// Score removed per leaked enemy (floored at zero).
pub const LEAK_PENALTY: u64 = 10_000;

// --- Waves ---

/// Seconds between waves.
pub const WAVE_COUNTDOWN_SECS: u32 = 5;

/// Per-tick probability of releasing one enemy while a wave is spawning.
/// Expected one spawn per 50 ticks.
pub const SPAWN_PROBABILITY: f64 = 0.02;

/// Number of precomputed Fibonacci wave sizes. Waves past the table reuse
/// the last entry so sizes plateau instead of growing unbounded.
pub const FIB_TABLE_LEN: usize = 20;

// --- Map shift ---

/// Ticks between map shifts (20 seconds).
pub const SHIFT_INTERVAL_TICKS: u64 = 20 * TICK_RATE as u64;

/// Maximum number of waypoints retained in a drifting path.
pub const MAX_PATH_LEN: usize = 12;

// --- Path-cell distance test ---

/// Perpendicular distance threshold for the segment-distance path-cell
/// policy, as a fraction of the cell size.
pub const PATH_DISTANCE_FACTOR: f64 = 0.45;
