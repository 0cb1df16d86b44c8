//! Player steering and automatic fire.

use glam::Vec2;
use hecs::World;

use skystrike_core::commands::InputState;
use skystrike_core::components::PlayerShip;
use skystrike_core::constants::*;
use skystrike_core::enums::BulletOwner;
use skystrike_core::types::{GameTime, Position};

use crate::world_setup;

/// Steer the player toward the input target and resolve automatic fire.
pub fn run(world: &mut World, time: &GameTime, input: InputState) {
    // (spawn position, horizontal speed) per bullet of this tick's volley.
    let mut volley: Vec<(Vec2, f32)> = Vec::new();
    let mut damage = 0u32;

    for (_entity, (pos, ship)) in world.query_mut::<(&mut Position, &PlayerShip)>() {
        // Exponential smoothing toward the target, then clamp to the arena.
        let half = ship.size / 2.0;
        pos.0 += (input.target - pos.0) * PLAYER_STEER_FACTOR;
        pos.0.x = pos.0.x.clamp(half, ARENA_WIDTH - half);
        pos.0.y = pos.0.y.clamp(half, ARENA_HEIGHT - half);

        if input.fire_held && fires_this_tick(time, ship.fire_rate_level) {
            damage = u32::from(ship.damage_level);
            let p = pos.0;
            match ship.power_level {
                1 => volley.push((Vec2::new(p.x, p.y - MUZZLE_OFFSET_Y), 0.0)),
                2 => {
                    volley.push((Vec2::new(p.x - TWIN_SHOT_OFFSET_X, p.y - MUZZLE_OFFSET_Y), 0.0));
                    volley.push((Vec2::new(p.x + TWIN_SHOT_OFFSET_X, p.y - MUZZLE_OFFSET_Y), 0.0));
                }
                _ => {
                    volley.push((Vec2::new(p.x, p.y - MUZZLE_OFFSET_Y), 0.0));
                    volley.push((
                        Vec2::new(p.x - ANGLED_SHOT_OFFSET_X, p.y - ANGLED_SHOT_OFFSET_Y),
                        -ANGLED_SHOT_SPEED_X,
                    ));
                    volley.push((
                        Vec2::new(p.x + ANGLED_SHOT_OFFSET_X, p.y - ANGLED_SHOT_OFFSET_Y),
                        ANGLED_SHOT_SPEED_X,
                    ));
                }
            }
        }
    }

    for (position, speed_x) in volley {
        world_setup::spawn_bullet(
            world,
            position,
            Vec2::new(speed_x, PLAYER_BULLET_SPEED),
            BulletOwner::Player,
            damage,
        );
    }
}

/// Shot interval for a fire rate level, in milliseconds.
pub fn fire_interval_ms(fire_rate_level: u8) -> f64 {
    (FIRE_INTERVAL_BASE_MS - f64::from(fire_rate_level - 1) * FIRE_INTERVAL_STEP_MS)
        .max(FIRE_INTERVAL_MIN_MS)
}

/// The shot clock fires on the tick where an interval boundary falls.
fn fires_this_tick(time: &GameTime, fire_rate_level: u8) -> bool {
    time.elapsed_ms % fire_interval_ms(fire_rate_level) < TICK_MS
}
