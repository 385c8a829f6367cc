//! Tower targeting and firing.
//!
//! Each tower either cools down or fires at most one shot per tick. Target
//! selection follows the tower's configured policy: first enemy in roster
//! order inside the range circle, or the nearest in-range enemy. Damage is
//! applied after the tower pass so the enemy roster is not aliased while
//! towers are being iterated.

use hecs::{Entity, World};

use driftline_core::archetypes::tower_profile;
use driftline_core::components::{Enemy, Health, Position, Tower, TowerInfo, UnitId};
use driftline_core::enums::{TargetingPolicy, TowerArchetype};
use driftline_core::events::GameEvent;
use driftline_core::types::Point;

use crate::world_setup;

struct Shot {
    target: Entity,
    damage: i32,
    from: Point,
    to: Point,
    archetype: TowerArchetype,
}

/// Run targeting and firing for all towers.
pub fn run(world: &mut World, id_counter: &mut u32, events: &mut Vec<GameEvent>) {
    // Roster snapshot in spawn order. Spawn order is roster order for the
    // first-in-range policy.
    let mut roster: Vec<(Entity, UnitId, Point)> = world
        .query::<(&Enemy, &UnitId, &Position)>()
        .iter()
        .map(|(entity, (_, id, pos))| (entity, *id, pos.to_point()))
        .collect();
    roster.sort_by_key(|(_, id, _)| *id);

    let mut shots: Vec<Shot> = Vec::new();

    for (_entity, (_tower, pos, info)) in
        world.query_mut::<(&Tower, &Position, &mut TowerInfo)>()
    {
        if info.reload > 0 {
            info.reload -= 1;
            continue;
        }

        let origin = pos.to_point();
        let target = match info.targeting {
            TargetingPolicy::FirstInRange => roster
                .iter()
                .find(|(_, _, enemy_pos)| origin.distance_to(enemy_pos) <= info.range),
            TargetingPolicy::Nearest => {
                let mut best = None;
                let mut best_dist = f64::INFINITY;
                for entry in &roster {
                    let dist = origin.distance_to(&entry.2);
                    if dist <= info.range && dist < best_dist {
                        best_dist = dist;
                        best = Some(entry);
                    }
                }
                best
            }
        };

        // No target in range: reload stays at 0, eligible next tick.
        let Some(&(target, _, enemy_pos)) = target else {
            continue;
        };

        info.reload = info.reload_time;
        shots.push(Shot {
            target,
            damage: info.damage,
            from: origin,
            to: enemy_pos,
            archetype: info.archetype,
        });
    }

    for shot in shots {
        if let Ok(mut health) = world.get::<&mut Health>(shot.target) {
            health.hp -= shot.damage;
        }
        let profile = tower_profile(shot.archetype);
        world_setup::spawn_trail(world, shot.from, shot.to, &profile, id_counter);
        events.push(GameEvent::ShotFired {
            archetype: shot.archetype,
        });
    }
}
