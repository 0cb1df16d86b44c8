//! Enemy fire system — each enemy shoots straight down on its own clock.

use glam::Vec2;
use hecs::World;

use skystrike_core::components::Enemy;
use skystrike_core::constants::{ENEMY_BULLET_DAMAGE, ENEMY_BULLET_SPEED};
use skystrike_core::enums::BulletOwner;
use skystrike_core::types::{GameTime, Position};

use crate::systems::progression::difficulty_factor;
use crate::world_setup;

/// Fire a single downward bullet for every enemy whose shot clock has
/// elapsed. The per-enemy interval shrinks with the difficulty factor;
/// the bullet itself is flat damage 1 regardless of level or class.
pub fn run(world: &mut World, time: &GameTime, level: u32) {
    let factor = difficulty_factor(level);
    let mut muzzles: Vec<Vec2> = Vec::new();

    for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
        if time.elapsed_ms - enemy.last_shot_ms > enemy.fire_rate_ms / factor {
            muzzles.push(Vec2::new(pos.0.x, pos.0.y + enemy.size / 2.0));
            enemy.last_shot_ms = time.elapsed_ms;
        }
    }

    for muzzle in muzzles {
        world_setup::spawn_bullet(
            world,
            muzzle,
            Vec2::new(0.0, ENEMY_BULLET_SPEED),
            BulletOwner::Enemy,
            ENEMY_BULLET_DAMAGE,
        );
    }
}
