//! Frame snapshot — the complete visible state handed to the renderer each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{GameTime, Rgb};

/// Complete visible state after one tick. The renderer is a pure consumer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: GameTime,
    pub phase: GamePhase,
    pub score: u64,
    /// Current stage level (starts at 1, unbounded).
    pub level: u32,
    /// Stage progress percentage in [0, 100].
    pub stage_progress: f64,
    /// None outside an active/finished run (e.g. on the main menu).
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub particles: Vec<ParticleView>,
    pub power_ups: Vec<PowerUpView>,
    /// Screen shake magnitude (pixels of jitter for the renderer).
    pub shake: f32,
    /// Background scroll offset in [0, arena height).
    pub scroll_offset: f32,
    pub banner: Option<BannerView>,
    /// Events that fired this tick.
    pub events: Vec<GameEvent>,
}

/// The player ship for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: f32,
    pub lives: u32,
    pub power_level: u8,
    pub fire_rate_level: u8,
    pub damage_level: u8,
    /// Remaining invincibility ticks (0 = vulnerable).
    pub invincible_ticks: u32,
    /// Blink state: false while an invincibility blink hides the ship.
    pub visible: bool,
}

/// An enemy for display, with an hp fraction for health bars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub size: f32,
    pub class: EnemyClass,
    /// hp / max_hp in [0, 1].
    pub hp_fraction: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec2,
    pub owner: BulletOwner,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec2,
    pub color: Rgb,
    pub size: f32,
    /// Remaining life in (0, 1], usable as alpha.
    pub life: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUpView {
    pub position: Vec2,
    pub kind: PowerUpKind,
    pub size: f32,
}

/// A transient banner over the arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BannerView {
    pub kind: BannerKind,
    /// Milliseconds until the banner clears.
    pub remaining_ms: f64,
}
