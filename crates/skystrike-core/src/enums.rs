//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    /// A run is in progress; the simulation ticks.
    Active,
    /// The run ended; the final score has been reported.
    GameOver,
}

/// Enemy archetype, selecting the stat template at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    /// Small, fast, fragile.
    Scout,
    /// Mid-size, quick trigger.
    Raider,
    /// Large, slow, heavily armored.
    Bomber,
}

impl EnemyClass {
    /// All archetypes, for uniform random selection.
    pub const ALL: [EnemyClass; 3] = [EnemyClass::Scout, EnemyClass::Raider, EnemyClass::Bomber];
}

/// Who fired a bullet. Decides which collision pass consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// Power-up variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Widens the bullet spread pattern (power level).
    Spread,
    /// Shortens the interval between shots (fire rate level).
    Fast,
    /// Raises per-bullet damage (damage level).
    Power,
}

impl PowerUpKind {
    /// All varieties, for uniform random drops.
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Spread, PowerUpKind::Fast, PowerUpKind::Power];
}

/// Which banner is currently displayed over the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerKind {
    /// Shown when a run starts.
    MissionStart,
    /// Shown when the given stage begins.
    Stage(u32),
}
