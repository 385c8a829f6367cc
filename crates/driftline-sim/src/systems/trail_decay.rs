//! Bullet-trail fade-out.

use hecs::{Entity, World};

use driftline_core::components::BulletTrail;

/// Decrement trail life and remove expired trails.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, trail) in world.query_mut::<&mut BulletTrail>() {
        trail.life = trail.life.saturating_sub(1);
        if trail.life == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
