//! Map shift controller.
//!
//! When the path provider's shift timer fires, the path scrolls one cell
//! left and everything dependent on it is remapped in the same tick:
//! towers slide with the grid and are evicted past the edge, enemies slide
//! and despawn silently off-screen (no kill or leak scoring), enemy path
//! indices account for dropped waypoints, and the occupancy set is rebuilt
//! with every column decremented.

use std::collections::HashSet;

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use driftline_core::components::{Enemy, PathFollower, Position, Tower, TowerInfo};
use driftline_core::config::GridConfig;
use driftline_core::events::GameEvent;

use crate::path::PathProvider;
use crate::systems::wave_scheduler::WaveState;

/// Advance the shift timer; on expiry, mutate the path and remap all
/// dependent state atomically.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    path: &mut PathProvider,
    occupancy: &mut HashSet<(i32, i32)>,
    wave: &mut WaveState,
    rng: &mut ChaCha8Rng,
    grid: &GridConfig,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    if !path.advance() {
        return;
    }

    let dropped_waypoints = path.shift(rng);
    let cell = grid.cell_size;
    despawn_buffer.clear();
    events.push(GameEvent::MapShifted);

    // Towers slide with the grid; a tower pushed past column 0 is evicted.
    for (entity, (_tower, pos, info)) in
        world.query_mut::<(&Tower, &mut Position, &mut TowerInfo)>()
    {
        pos.x -= cell;
        info.col -= 1;
        if info.col < 0 {
            despawn_buffer.push(entity);
            events.push(GameEvent::TowerEvicted {
                col: info.col,
                row: info.row,
            });
        }
    }

    // Rebuild occupancy: every key's column decrements, keys that would go
    // negative are dropped. Evicted towers free their cells here.
    *occupancy = occupancy
        .iter()
        .filter(|&&(col, _)| col > 0)
        .map(|&(col, row)| (col - 1, row))
        .collect();

    // Enemies slide too; ones fully off-screen despawn without scoring.
    // Path indices shift down by the number of dropped waypoints so each
    // enemy still heads for the same physical waypoint.
    for (entity, (_enemy, pos, follower)) in
        world.query_mut::<(&Enemy, &mut Position, &mut PathFollower)>()
    {
        pos.x -= cell;
        follower.path_index = follower.path_index.saturating_sub(dropped_waypoints);
        if pos.x < -cell {
            despawn_buffer.push(entity);
            wave.enemies_alive = wave.enemies_alive.saturating_sub(1);
            events.push(GameEvent::EnemyScrolledOff);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
