//! Cleanup system: reconciles dead and leaked enemies with the economy.
//!
//! Removals are collected into a buffer and applied after iteration, never
//! by removing from the roster mid-scan. A kill awards currency and score;
//! a leak applies the score penalty (floored at zero). `enemies_alive`
//! decrements saturate so the count never goes negative.

use hecs::{Entity, World};

use driftline_core::components::{Enemy, Health, PathFollower};
use driftline_core::config::EconomyConfig;
use driftline_core::events::GameEvent;

use crate::economy::EconomyState;
use crate::systems::wave_scheduler::WaveState;

/// Remove enemies that died or reached the final waypoint, applying
/// economy and score side effects.
pub fn run(
    world: &mut World,
    wave: &mut WaveState,
    economy: &mut EconomyState,
    cfg: &EconomyConfig,
    path_len: usize,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    for (entity, (_enemy, health, follower)) in
        world.query_mut::<(&Enemy, &Health, &PathFollower)>()
    {
        if health.hp <= 0 {
            despawn_buffer.push(entity);
            economy.award_kill(cfg);
            wave.enemies_alive = wave.enemies_alive.saturating_sub(1);
            events.push(GameEvent::EnemyKilled {
                reward: cfg.kill_reward,
                score: cfg.kill_score,
            });
        } else if path_len > 0 && follower.path_index >= path_len - 1 {
            despawn_buffer.push(entity);
            economy.penalize_leak(cfg);
            wave.enemies_alive = wave.enemies_alive.saturating_sub(1);
            events.push(GameEvent::EnemyLeaked {
                penalty: cfg.leak_penalty,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
