//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::{PLAYER_SIZE, PLAYER_START_LIVES};
use crate::enums::{BulletOwner, EnemyClass, PowerUpKind};
use crate::types::Rgb;

/// The player's ship. Exactly one exists while a run is active.
///
/// Position is steered toward the input target each tick rather than
/// velocity-integrated, so the player entity carries no Velocity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip {
    /// Square hitbox size (pixels).
    pub size: f32,
    /// Remaining lives. The run ends when this reaches 0.
    pub lives: u32,
    /// Bullet spread pattern, 1..=3.
    pub power_level: u8,
    /// Shot interval reducer, 1..=4.
    pub fire_rate_level: u8,
    /// Per-bullet damage, 1..=5.
    pub damage_level: u8,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self {
            size: PLAYER_SIZE,
            lives: PLAYER_START_LIVES,
            power_level: 1,
            fire_rate_level: 1,
            damage_level: 1,
        }
    }
}

/// An enemy ship descending through the arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub class: EnemyClass,
    /// Square hitbox size (pixels).
    pub size: f32,
    /// Current hit points; never exceeds `max_hp`, dead at 0.
    pub hp: u32,
    /// Hit points at spawn, fixed for the enemy's lifetime.
    pub max_hp: u32,
    /// Score awarded when destroyed by a bullet.
    pub score_value: u32,
    /// Base milliseconds between shots (divided by the difficulty factor).
    pub fire_rate_ms: f64,
    /// Simulation timestamp of the last shot (milliseconds).
    pub last_shot_ms: f64,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub owner: BulletOwner,
    pub damage: u32,
}

/// A short-lived visual fragment from an explosion or spark.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Remaining life in (0, 1]; decays each tick, dead at 0.
    pub life: f32,
    pub color: Rgb,
    pub size: f32,
}

/// A collectible stat boost falling from a destroyed enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Square hitbox size (pixels).
    pub size: f32,
}
