//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use skystrike_core::components::{Bullet, Enemy, Particle, PlayerShip, PowerUp};
use skystrike_core::constants::INVINCIBILITY_BLINK_PERIOD;
use skystrike_core::enums::GamePhase;
use skystrike_core::events::GameEvent;
use skystrike_core::state::*;
use skystrike_core::types::{GameTime, Position};

use crate::engine::RunState;
use crate::systems::progression;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &GameTime,
    phase: GamePhase,
    run: &RunState,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        score: run.score,
        level: run.level,
        stage_progress: progression::stage_progress(run),
        player: build_player(world, run),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        particles: build_particles(world),
        power_ups: build_power_ups(world),
        shake: run.shake,
        scroll_offset: run.scroll_offset,
        banner: run.banner.map(|b| BannerView {
            kind: b.kind,
            remaining_ms: b.remaining_ms,
        }),
        events,
    }
}

/// Build the player view, including the invincibility blink state.
fn build_player(world: &World, run: &RunState) -> Option<PlayerView> {
    world
        .query::<(&Position, &PlayerShip)>()
        .iter()
        .next()
        .map(|(_, (pos, ship))| PlayerView {
            position: pos.0,
            size: ship.size,
            lives: ship.lives,
            power_level: ship.power_level,
            fire_rate_level: ship.fire_rate_level,
            damage_level: ship.damage_level,
            invincible_ticks: run.invincible_ticks,
            visible: run.invincible_ticks % INVINCIBILITY_BLINK_PERIOD
                < INVINCIBILITY_BLINK_PERIOD / 2,
        })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(_, (pos, enemy))| EnemyView {
            position: pos.0,
            size: enemy.size,
            class: enemy.class,
            hp_fraction: if enemy.max_hp == 0 {
                0.0
            } else {
                enemy.hp as f32 / enemy.max_hp as f32
            },
        })
        .collect()
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Position, &Bullet)>()
        .iter()
        .map(|(_, (pos, bullet))| BulletView {
            position: pos.0,
            owner: bullet.owner,
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle)>()
        .iter()
        .map(|(_, (pos, particle))| ParticleView {
            position: pos.0,
            color: particle.color,
            size: particle.size,
            life: particle.life,
        })
        .collect()
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    world
        .query::<(&Position, &PowerUp)>()
        .iter()
        .map(|(_, (pos, power_up))| PowerUpView {
            position: pos.0,
            kind: power_up.kind,
            size: power_up.size,
        })
        .collect()
}
