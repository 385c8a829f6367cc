//! Enemy movement along the path polyline.
//!
//! Distances are pixels per tick against the fixed tick rate. When the
//! remaining distance to the next waypoint is smaller than one step, the
//! enemy snaps exactly onto the waypoint instead of overshooting.

use glam::DVec2;
use hecs::World;

use driftline_core::components::{EnemyInfo, PathFollower, Position};
use driftline_core::types::Point;

/// Advance every enemy toward its next waypoint.
pub fn run(world: &mut World, path: &[Point]) {
    for (_entity, (pos, follower, info)) in
        world.query_mut::<(&mut Position, &mut PathFollower, &EnemyInfo)>()
    {
        // No next waypoint: the enemy is at the path end. The cleanup
        // system handles the leak; the mover must not touch it.
        let Some(target) = path.get(follower.path_index + 1) else {
            continue;
        };

        let to_target = target.to_vec() - DVec2::new(pos.x, pos.y);
        let dist = to_target.length();

        if dist < info.speed || dist == 0.0 {
            // Snap onto the waypoint; also covers the degenerate
            // zero-distance case without normalizing a zero vector.
            pos.x = target.x;
            pos.y = target.y;
            follower.path_index += 1;
        } else {
            let step = to_target / dist * info.speed;
            pos.x += step.x;
            pos.y += step.y;
        }
    }
}
