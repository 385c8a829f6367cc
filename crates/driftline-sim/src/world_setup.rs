//! Entity spawn factories.
//!
//! Creates enemy, tower, and bullet-trail entities with their component
//! bundles, resolving archetype profiles at spawn time.

use hecs::World;

use driftline_core::archetypes::{enemy_profile, tower_profile, TowerProfile};
use driftline_core::components::*;
use driftline_core::enums::{EnemyArchetype, TowerArchetype};
use driftline_core::grid::GridSnap;
use driftline_core::types::Point;

/// Allocate the next stable unit id.
fn next_unit_id(counter: &mut u32) -> UnitId {
    let id = UnitId(*counter);
    *counter += 1;
    id
}

/// Spawn an enemy at the path's first waypoint.
pub fn spawn_enemy(
    world: &mut World,
    archetype: EnemyArchetype,
    spawn_point: Point,
    id_counter: &mut u32,
) -> hecs::Entity {
    let profile = enemy_profile(archetype);
    world.spawn((
        Enemy,
        next_unit_id(id_counter),
        Position::new(spawn_point.x, spawn_point.y),
        PathFollower { path_index: 0 },
        Health {
            hp: profile.hp,
            max_hp: profile.hp,
        },
        EnemyInfo {
            archetype,
            speed: profile.speed,
        },
    ))
}

/// Spawn a tower at a validated grid cell, ready to fire.
pub fn spawn_tower(
    world: &mut World,
    archetype: TowerArchetype,
    snap: GridSnap,
    id_counter: &mut u32,
) -> hecs::Entity {
    let profile = tower_profile(archetype);
    world.spawn((
        Tower,
        next_unit_id(id_counter),
        Position::new(snap.x, snap.y),
        TowerInfo {
            archetype,
            col: snap.col,
            row: snap.row,
            range: profile.range,
            damage: profile.damage,
            reload_time: profile.reload_time,
            reload: 0,
            targeting: profile.targeting,
        },
    ))
}

/// Spawn the visual trail of a shot.
pub fn spawn_trail(
    world: &mut World,
    from: Point,
    to: Point,
    profile: &TowerProfile,
    id_counter: &mut u32,
) -> hecs::Entity {
    world.spawn((
        next_unit_id(id_counter),
        BulletTrail {
            from,
            to,
            life: profile.trail_life,
            color: profile.trail_color.to_string(),
        },
    ))
}
