//! Snapshot system: queries the world and builds a GameStateSnapshot.
//!
//! Read-only — it never modifies the world. Views are sorted by unit id so
//! identical simulations produce identical snapshots.

use hecs::World;

use driftline_core::archetypes::enemy_profile;
use driftline_core::components::*;
use driftline_core::enums::{GamePhase, TowerArchetype};
use driftline_core::events::GameEvent;
use driftline_core::state::*;
use driftline_core::types::{Point, SimTime};

use crate::economy::EconomyState;
use crate::systems::wave_scheduler::WaveState;

/// Build a complete snapshot from the current simulation state.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    path: &[Point],
    wave: &WaveState,
    economy: &EconomyState,
    pending_placement: Option<TowerArchetype>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        enemies: build_enemies(world),
        towers: build_towers(world),
        bullets: build_bullets(world),
        path: path.to_vec(),
        hud: HudView {
            money: economy.money,
            wave: wave.current_wave,
            enemies_alive: wave.enemies_alive,
            countdown_secs: wave.countdown_secs,
            score: economy.score,
            high_score: economy.high_score,
        },
        placement: PlacementView {
            selected: pending_placement,
        },
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &UnitId, &Position, &Health, &EnemyInfo, &PathFollower)>()
        .iter()
        .map(|(_, (_, id, pos, health, info, follower))| EnemyView {
            id: id.0,
            archetype: info.archetype,
            x: pos.x,
            y: pos.y,
            hp: health.hp,
            max_hp: health.max_hp,
            color: enemy_profile(info.archetype).color.to_string(),
            path_index: follower.path_index,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &UnitId, &Position, &TowerInfo)>()
        .iter()
        .map(|(_, (_, id, pos, info))| TowerView {
            id: id.0,
            archetype: info.archetype,
            x: pos.x,
            y: pos.y,
            col: info.col,
            row: info.row,
            range: info.range,
            reload: info.reload,
            reload_time: info.reload_time,
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<(u32, BulletView)> = world
        .query::<(&UnitId, &BulletTrail)>()
        .iter()
        .map(|(_, (id, trail))| {
            (
                id.0,
                BulletView {
                    from: trail.from,
                    to: trail.to,
                    life: trail.life,
                    color: trail.color.clone(),
                },
            )
        })
        .collect();

    bullets.sort_by_key(|(id, _)| *id);
    bullets.into_iter().map(|(_, view)| view).collect()
}
