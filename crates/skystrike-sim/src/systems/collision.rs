//! Collision and combat resolution.
//!
//! Runs once per tick after movement, in a fixed order: power-up pickup,
//! enemy-vs-player body collisions, player bullets against enemies, enemy
//! bullets against the player.
//!
//! Three distinct overlap policies are intentional and kept separate:
//! bullets test point-vs-box against the enemy hitbox, body collisions use
//! 35% of combined sizes, and enemy bullets test against a quarter-size
//! player box.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Bullet, Enemy, PlayerShip, PowerUp};
use skystrike_core::constants::*;
use skystrike_core::enums::{BulletOwner, PowerUpKind};
use skystrike_core::events::GameEvent;
use skystrike_core::types::Position;

use crate::engine::RunState;
use crate::systems::spawner;
use crate::world_setup;

/// Resolve all collisions for this tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
) {
    let Some((player, player_pos, player_size)) = find_player(world) else {
        return;
    };

    collect_power_ups(world, rng, events, player, player_pos, player_size);
    resolve_body_collisions(world, rng, run, events, player, player_pos, player_size);
    resolve_player_bullets(world, rng, run, events);
    resolve_enemy_bullets(world, rng, run, events, player, player_pos, player_size);
}

/// Locate the player entity and copy out its position and hitbox size.
fn find_player(world: &World) -> Option<(Entity, Vec2, f32)> {
    world
        .query::<(&Position, &PlayerShip)>()
        .iter()
        .next()
        .map(|(entity, (pos, ship))| (entity, pos.0, ship.size))
}

/// Power-up pickup: half-player-size overlap, stat applied with its clamp.
fn collect_power_ups(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    player: Entity,
    player_pos: Vec2,
    player_size: f32,
) {
    let mut collected: Vec<(Entity, Vec2, PowerUpKind)> = Vec::new();
    for (entity, (pos, power_up)) in world.query::<(&Position, &PowerUp)>().iter() {
        let d = (pos.0 - player_pos).abs();
        if d.x < player_size / 2.0 && d.y < player_size / 2.0 {
            collected.push((entity, pos.0, power_up.kind));
        }
    }

    for (entity, position, kind) in collected {
        let _ = world.despawn(entity);
        apply_power_up(world, player, kind);
        world_setup::spawn_explosion(
            world,
            rng,
            position,
            COLOR_PICKUP_BURST,
            PICKUP_BURST_PARTICLES,
        );
        events.push(GameEvent::PowerUpCollected { kind });
    }
}

/// Apply a power-up's stat increase, clamped to its maximum.
fn apply_power_up(world: &mut World, player: Entity, kind: PowerUpKind) {
    if let Ok(mut ship) = world.get::<&mut PlayerShip>(player) {
        match kind {
            PowerUpKind::Spread => {
                ship.power_level = (ship.power_level + 1).min(POWER_LEVEL_MAX);
            }
            PowerUpKind::Fast => {
                ship.fire_rate_level = (ship.fire_rate_level + 1).min(FIRE_RATE_LEVEL_MAX);
            }
            PowerUpKind::Power => {
                ship.damage_level = (ship.damage_level + 1).min(DAMAGE_LEVEL_MAX);
            }
        }
    }
}

/// Enemy-vs-player body collisions at 35% of combined sizes. A rammed
/// enemy is removed immediately regardless of remaining hp and awards
/// no score.
#[allow(clippy::too_many_arguments)]
fn resolve_body_collisions(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
    player: Entity,
    player_pos: Vec2,
    player_size: f32,
) {
    let mut rammed: Vec<Entity> = Vec::new();
    for (entity, (pos, enemy)) in world.query::<(&Position, &Enemy)>().iter() {
        let d = (pos.0 - player_pos).abs();
        let reach = (enemy.size + player_size) * BODY_COLLISION_FACTOR;
        if d.x < reach && d.y < reach {
            rammed.push(entity);
        }
    }

    for entity in rammed {
        let _ = world.despawn(entity);
        hit_player(world, rng, run, events, player);
    }
}

/// Working copy of an enemy hitbox for the bullet pass.
struct EnemyBox {
    entity: Entity,
    center: Vec2,
    half: f32,
    hp: u32,
}

/// Player bullets against enemies: point-vs-box, each bullet consumed by
/// the first enemy it overlaps in bullet iteration order.
fn resolve_player_bullets(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
) {
    let mut enemies: Vec<EnemyBox> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| EnemyBox {
            entity,
            center: pos.0,
            half: enemy.size / 2.0,
            hp: enemy.hp,
        })
        .collect();

    let bullets: Vec<(Entity, Vec2, u32)> = world
        .query::<(&Position, &Bullet)>()
        .iter()
        .filter(|(_, (_, bullet))| bullet.owner == BulletOwner::Player)
        .map(|(entity, (pos, bullet))| (entity, pos.0, bullet.damage))
        .collect();

    let mut consumed: Vec<Entity> = Vec::new();
    let mut kills: Vec<(Entity, Vec2)> = Vec::new();
    let mut sparks: Vec<Vec2> = Vec::new();

    for (bullet, bullet_pos, damage) in bullets {
        // Enemies that died earlier in this pass are no longer targets, so
        // a kill can only be scored once.
        let target = enemies.iter_mut().find(|e| {
            e.hp > 0 && {
                let d = (bullet_pos - e.center).abs();
                d.x < e.half && d.y < e.half
            }
        });
        let Some(target) = target else {
            continue;
        };

        consumed.push(bullet);
        target.hp = target.hp.saturating_sub(damage);
        if target.hp == 0 {
            kills.push((target.entity, target.center));
        } else {
            sparks.push(bullet_pos);
        }
    }

    // Write back the surviving hp; dead enemies are pruned by cleanup.
    for e in &enemies {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(e.entity) {
            enemy.hp = e.hp;
        }
    }
    for bullet in consumed {
        let _ = world.despawn(bullet);
    }
    for position in sparks {
        world_setup::spawn_explosion(world, rng, position, COLOR_HIT_SPARK, HIT_SPARK_PARTICLES);
    }
    for (entity, position) in kills {
        let (class, score_value) = match world.get::<&Enemy>(entity) {
            Ok(enemy) => (enemy.class, enemy.score_value),
            Err(_) => continue,
        };
        run.score += u64::from(score_value);
        run.shake = SHAKE_ON_KILL;
        world_setup::spawn_explosion(
            world,
            rng,
            position,
            COLOR_KILL_EXPLOSION,
            EXPLOSION_KILL_PARTICLES,
        );
        spawner::maybe_drop_power_up(world, rng, position);
        events.push(GameEvent::EnemyDestroyed { class, score_value });
        tracing::debug!(?class, score = run.score, "enemy destroyed");
    }
}

/// Enemy bullets against the player's quarter-size hitbox.
#[allow(clippy::too_many_arguments)]
fn resolve_enemy_bullets(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
    player: Entity,
    player_pos: Vec2,
    player_size: f32,
) {
    let reach = player_size / PLAYER_BULLET_HITBOX_DIVISOR;
    let mut hits: Vec<Entity> = Vec::new();
    for (entity, (pos, bullet)) in world.query::<(&Position, &Bullet)>().iter() {
        if bullet.owner == BulletOwner::Enemy {
            let d = (pos.0 - player_pos).abs();
            if d.x < reach && d.y < reach {
                hits.push(entity);
            }
        }
    }

    for entity in hits {
        let _ = world.despawn(entity);
        hit_player(world, rng, run, events, player);
    }
}

/// The player-hit handler, shared by every hit source.
///
/// No-op while the invincibility window is open or the run is already
/// over. A non-fatal hit strips all power levels and opens the window;
/// a fatal hit flags game over for the engine to act on at tick end.
fn hit_player(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
    player: Entity,
) {
    if run.invincible_ticks > 0 || run.game_over {
        return;
    }

    let (position, lives_remaining) = {
        let Ok((pos, ship)) = world.query_one_mut::<(&Position, &mut PlayerShip)>(player) else {
            return;
        };
        ship.lives = ship.lives.saturating_sub(1);
        ship.power_level = 1;
        ship.fire_rate_level = 1;
        ship.damage_level = 1;
        (pos.0, ship.lives)
    };

    run.shake = SHAKE_ON_PLAYER_HIT;
    world_setup::spawn_explosion(
        world,
        rng,
        position,
        COLOR_PLAYER_EXPLOSION,
        EXPLOSION_PLAYER_HIT_PARTICLES,
    );
    events.push(GameEvent::PlayerHit { lives_remaining });

    if lives_remaining == 0 {
        run.game_over = true;
        events.push(GameEvent::GameOver {
            final_score: run.score,
        });
        tracing::info!(final_score = run.score, "game over");
    } else {
        run.invincible_ticks = INVINCIBILITY_TICKS;
    }
}
