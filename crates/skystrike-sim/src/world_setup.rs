//! Entity spawn factories for populating the simulation world.
//!
//! Creates the player ship, enemies, bullets, power-ups, and particle
//! bursts with appropriate component bundles.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Bullet, Enemy, Particle, PlayerShip, PowerUp};
use skystrike_core::constants::*;
use skystrike_core::enums::{BulletOwner, EnemyClass, PowerUpKind};
use skystrike_core::types::{Position, Rgb, Velocity};

/// Spawn the player ship at its start position with default stats.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerShip::default(),
        Position::new(
            ARENA_WIDTH / 2.0,
            ARENA_HEIGHT - PLAYER_SPAWN_BOTTOM_OFFSET,
        ),
    ))
}

/// Stat template for an enemy class:
/// (size, base hp, base speed, score value, fire rate ms).
pub fn enemy_class_params(class: EnemyClass) -> (f32, u32, f32, u32, f64) {
    match class {
        EnemyClass::Scout => (50.0, 2, 2.2, 100, 2_000.0),
        EnemyClass::Raider => (65.0, 5, 1.8, 250, 1_500.0),
        EnemyClass::Bomber => (85.0, 10, 1.2, 500, 3_000.0),
    }
}

/// Spawn an enemy just above the top edge at a random x, with hp and speed
/// scaled by the current level. `now_ms` seeds the enemy's shot clock.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    class: EnemyClass,
    level: u32,
    now_ms: f64,
) -> hecs::Entity {
    let (size, base_hp, base_speed, score_value, fire_rate_ms) = enemy_class_params(class);

    let max_hp = base_hp + level / 2;
    let speed = base_speed * (1.0 + level.saturating_sub(1) as f32 * ENEMY_SPEED_STEP);
    let x = rng.gen_range(0.0..(ARENA_WIDTH - size)) + size / 2.0;

    world.spawn((
        Enemy {
            class,
            size,
            hp: max_hp,
            max_hp,
            score_value,
            fire_rate_ms,
            last_shot_ms: now_ms,
        },
        Position::new(x, -size),
        Velocity::new(0.0, speed),
    ))
}

/// Spawn a power-up falling from `position`.
pub fn spawn_power_up(world: &mut World, kind: PowerUpKind, position: Vec2) -> hecs::Entity {
    world.spawn((
        PowerUp {
            kind,
            size: POWER_UP_SIZE,
        },
        Position(position),
        Velocity::new(0.0, POWER_UP_FALL_SPEED),
    ))
}

/// Spawn a bullet at `position` with the given per-tick velocity.
pub fn spawn_bullet(
    world: &mut World,
    position: Vec2,
    velocity: Vec2,
    owner: BulletOwner,
    damage: u32,
) -> hecs::Entity {
    world.spawn((Bullet { owner, damage }, Position(position), Velocity(velocity)))
}

/// Spawn a burst of `count` particles scattering from `position`.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec2,
    color: Rgb,
    count: usize,
) {
    for _ in 0..count {
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * PARTICLE_VELOCITY_SPREAD,
            (rng.gen::<f32>() - 0.5) * PARTICLE_VELOCITY_SPREAD,
        );
        let size = rng.gen::<f32>() * PARTICLE_SIZE_RANGE + PARTICLE_SIZE_MIN;
        world.spawn((
            Particle {
                life: 1.0,
                color,
                size,
            },
            Position(position),
            Velocity(velocity),
        ));
    }
}
