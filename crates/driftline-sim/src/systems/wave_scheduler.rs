//! Wave scheduling system.
//!
//! A two-state machine: while no wave is active it counts down whole
//! seconds toward the next wave; while a wave is active it releases the
//! wave's enemies one at a time on probabilistic rolls. A new wave begins
//! only after every enemy of the previous one has been killed, leaked, or
//! scrolled off. Wave sizes follow a Fibonacci table that plateaus at its
//! last entry.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use driftline_core::config::WaveConfig;
use driftline_core::constants::TICK_RATE;
use driftline_core::enums::EnemyArchetype;
use driftline_core::events::GameEvent;
use driftline_core::types::Point;

use crate::world_setup;

/// Scheduler state carried across ticks.
#[derive(Debug, Clone)]
pub struct WaveState {
    /// Wave counter shown to the player. Starts at 1, increments when a
    /// wave begins releasing.
    pub current_wave: u32,
    /// 0-based index into the Fibonacci size table.
    pub wave_index: usize,
    /// Enemies of the current wave not yet released.
    pub enemies_to_spawn: u32,
    /// Enemies currently on the path. Never negative.
    pub enemies_alive: u32,
    /// Whole seconds until the next wave begins.
    pub countdown_secs: u32,
    ticks_into_second: u32,
    fib: Vec<u32>,
}

impl WaveState {
    pub fn new(cfg: &WaveConfig) -> Self {
        Self {
            current_wave: 1,
            wave_index: 0,
            enemies_to_spawn: 0,
            enemies_alive: 0,
            countdown_secs: cfg.countdown_secs,
            ticks_into_second: 0,
            fib: fib_table(cfg.fib_table_len),
        }
    }

    /// Size of the wave at a table index; past the table the last entry
    /// repeats.
    pub fn wave_size(&self, index: usize) -> u32 {
        self.fib
            .get(index)
            .or_else(|| self.fib.last())
            .copied()
            .unwrap_or(1)
    }
}

/// Precompute `fib[0] = fib[1] = 1, fib[i] = fib[i-1] + fib[i-2]`.
/// Saturates so an oversized table length plateaus at `u32::MAX`
/// instead of overflowing (the sum exceeds u32 from index 47).
fn fib_table(len: usize) -> Vec<u32> {
    let len = len.max(2);
    let mut fib = vec![1u32; len];
    for i in 2..len {
        fib[i] = fib[i - 1].saturating_add(fib[i - 2]);
    }
    fib
}

/// Run one tick of the scheduler.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    cfg: &WaveConfig,
    spawn_point: Point,
    id_counter: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    if wave.enemies_to_spawn == 0 && wave.enemies_alive == 0 {
        if wave.countdown_secs > 0 {
            // Countdown runs on whole seconds of sim time.
            wave.ticks_into_second += 1;
            if wave.ticks_into_second >= TICK_RATE {
                wave.ticks_into_second = 0;
                wave.countdown_secs -= 1;
            }
        } else {
            let size = wave.wave_size(wave.wave_index);
            wave.enemies_to_spawn = size;
            wave.wave_index += 1;
            wave.current_wave += 1;
            wave.countdown_secs = cfg.countdown_secs;
            events.push(GameEvent::WaveStarted {
                wave: wave.current_wave,
                size,
            });
        }
    } else if wave.enemies_to_spawn > 0 && rng.gen::<f64>() < cfg.spawn_probability {
        let archetype = pick_archetype(cfg, wave.current_wave, rng);
        world_setup::spawn_enemy(world, archetype, spawn_point, id_counter);
        wave.enemies_to_spawn -= 1;
        wave.enemies_alive += 1;
        events.push(GameEvent::EnemySpawned { archetype });
    }
}

/// Pick an enemy type for the current wave from the composition table:
/// the latest phase whose `from_wave` has been reached, weighted randomly.
pub fn pick_archetype(cfg: &WaveConfig, current_wave: u32, rng: &mut ChaCha8Rng) -> EnemyArchetype {
    let phase = cfg
        .phases
        .iter()
        .filter(|p| p.from_wave <= current_wave)
        .last();

    let Some(phase) = phase else {
        return EnemyArchetype::Normal;
    };

    let total: f64 = phase.weights.iter().map(|(_, w)| w).sum();
    if total <= 0.0 || phase.weights.is_empty() {
        return EnemyArchetype::Normal;
    }

    let mut roll = rng.gen::<f64>() * total;
    for &(archetype, weight) in &phase.weights {
        if roll < weight {
            return archetype;
        }
        roll -= weight;
    }
    // Rounding fell off the end of the table.
    phase.weights[phase.weights.len() - 1].0
}
