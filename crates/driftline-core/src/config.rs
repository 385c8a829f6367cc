//! Game configuration.
//!
//! Every tunable the simulation reads lives here, with defaults matching
//! the constants module. Rewards, costs, wave thresholds, and policy
//! choices are data, not code.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyArchetype, PathCellPolicy, PathMode};

/// Grid dimensions and placement policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cell size in pixels.
    pub cell_size: f64,
    /// Grid width in cells.
    pub cols: u32,
    /// Grid height in cells.
    pub rows: u32,
    /// Which path/cell collision test placement uses.
    pub path_cell_policy: PathCellPolicy,
}

/// Economy and scoring constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyConfig {
    pub starting_money: u32,
    /// Currency per kill.
    pub kill_reward: u32,
    /// Score per kill.
    pub kill_score: u64,
    /// Score removed per leak (score floors at zero).
    pub leak_penalty: u64,
}

/// One entry of the wave composition table: from `from_wave` on, enemy
/// types are drawn with the given weights until a later entry applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPhase {
    /// First wave number this phase applies to (1-based).
    pub from_wave: u32,
    /// Relative weights per archetype. Normalized at selection time.
    pub weights: Vec<(EnemyArchetype, f64)>,
}

/// Wave scheduling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Seconds of countdown between waves.
    pub countdown_secs: u32,
    /// Per-tick probability of releasing one enemy while spawning.
    pub spawn_probability: f64,
    /// Length of the precomputed Fibonacci size table.
    pub fib_table_len: usize,
    /// Wave composition phases, sorted by `from_wave`.
    pub phases: Vec<SpawnPhase>,
}

/// Map drift parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftConfig {
    pub mode: PathMode,
    /// Ticks between shifts.
    pub interval_ticks: u64,
    /// Maximum waypoints retained in the path.
    pub max_path_len: usize,
}

/// Complete simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub economy: EconomyConfig,
    pub wave: WaveConfig,
    pub shift: ShiftConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            cols: GRID_COLS,
            rows: GRID_ROWS,
            path_cell_policy: PathCellPolicy::default(),
        }
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            kill_reward: KILL_REWARD,
            kill_score: KILL_SCORE,
            leak_penalty: LEAK_PENALTY,
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            countdown_secs: WAVE_COUNTDOWN_SECS,
            spawn_probability: SPAWN_PROBABILITY,
            fib_table_len: FIB_TABLE_LEN,
            phases: default_spawn_phases(),
        }
    }
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            mode: PathMode::default(),
            interval_ticks: SHIFT_INTERVAL_TICKS,
            max_path_len: MAX_PATH_LEN,
        }
    }
}

/// Default composition: early waves all-Normal, waves 4-6 all-Fast, wave 7
/// onward a 50/30/20 mix across all three archetypes.
pub fn default_spawn_phases() -> Vec<SpawnPhase> {
    vec![
        SpawnPhase {
            from_wave: 1,
            weights: vec![(EnemyArchetype::Normal, 1.0)],
        },
        SpawnPhase {
            from_wave: 4,
            weights: vec![(EnemyArchetype::Fast, 1.0)],
        },
        SpawnPhase {
            from_wave: 7,
            weights: vec![
                (EnemyArchetype::Normal, 0.5),
                (EnemyArchetype::Fast, 0.3),
                (EnemyArchetype::Slow, 0.2),
            ],
        },
    ]
}
