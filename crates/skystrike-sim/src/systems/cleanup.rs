//! Cleanup system: removes entities that are dead, expired, or out of bounds.

use hecs::{Entity, World};

use skystrike_core::components::{Bullet, Enemy, Particle, PowerUp};
use skystrike_core::constants::*;
use skystrike_core::types::Position;

/// Remove every entity whose terminal condition holds.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Bullets outside the arena plus margin on any side.
    for (entity, (pos, _bullet)) in world.query_mut::<(&Position, &Bullet)>() {
        let p = pos.0;
        if p.x < -BULLET_BOUNDS_MARGIN
            || p.x > ARENA_WIDTH + BULLET_BOUNDS_MARGIN
            || p.y < -BULLET_BOUNDS_MARGIN
            || p.y > ARENA_HEIGHT + BULLET_BOUNDS_MARGIN
        {
            despawn_buffer.push(entity);
        }
    }

    // Dead enemies, and enemies that drifted past the bottom edge.
    for (entity, (pos, enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if enemy.hp == 0 || pos.0.y > ARENA_HEIGHT + ENEMY_BOUNDS_MARGIN {
            despawn_buffer.push(entity);
        }
    }

    // Power-ups that fell past the bottom margin uncollected.
    for (entity, (pos, _power_up)) in world.query_mut::<(&Position, &PowerUp)>() {
        if pos.0.y > ARENA_HEIGHT + POWER_UP_BOUNDS_MARGIN {
            despawn_buffer.push(entity);
        }
    }

    // Expired particles.
    for (entity, particle) in world.query_mut::<&Particle>() {
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
