//! Enemy spawning and power-up drops.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::constants::{
    POWER_UP_DROP_CHANCE, SPAWN_INTERVAL_BASE_MS, SPAWN_INTERVAL_MIN_MS,
};
use skystrike_core::enums::{EnemyClass, PowerUpKind};
use skystrike_core::types::GameTime;

use crate::engine::RunState;
use crate::systems::progression::difficulty_factor;
use crate::world_setup;

/// Milliseconds between enemy spawns at the given level.
pub fn spawn_interval_ms(level: u32) -> f64 {
    (SPAWN_INTERVAL_BASE_MS / difficulty_factor(level)).max(SPAWN_INTERVAL_MIN_MS)
}

/// Spawn a new enemy of a uniformly random class once the spawn interval
/// has elapsed.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, run: &mut RunState, time: &GameTime) {
    if time.elapsed_ms - run.last_spawn_ms > spawn_interval_ms(run.level) {
        let class = EnemyClass::ALL[rng.gen_range(0..EnemyClass::ALL.len())];
        world_setup::spawn_enemy(world, rng, class, run.level, time.elapsed_ms);
        run.last_spawn_ms = time.elapsed_ms;
        tracing::debug!(?class, level = run.level, "enemy spawned");
    }
}

/// Roll the power-up drop for an enemy destroyed at `position`.
pub fn maybe_drop_power_up(world: &mut World, rng: &mut ChaCha8Rng, position: Vec2) {
    if !rng.gen_bool(POWER_UP_DROP_CHANCE) {
        return;
    }
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    world_setup::spawn_power_up(world, kind, position);
}
