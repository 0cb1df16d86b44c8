//! Simulation constants and tuning parameters.

use crate::types::Rgb;

/// Fixed logical step per tick in milliseconds (~60 Hz cadence).
pub const TICK_MS: f64 = 16.0;

// --- Arena ---

/// Logical arena width in pixels.
pub const ARENA_WIDTH: f32 = 450.0;

/// Logical arena height in pixels.
pub const ARENA_HEIGHT: f32 = 800.0;

// --- Stages ---

/// Stage length in milliseconds (30 seconds per stage).
pub const STAGE_LENGTH_MS: f64 = 30_000.0;

/// How long the stage/mission banner stays on screen (milliseconds).
pub const BANNER_DURATION_MS: f64 = 2_000.0;

// --- Difficulty scaling ---

/// Difficulty factor gain per level above 1.
pub const DIFFICULTY_STEP: f64 = 0.3;

/// Enemy speed gain per level above 1 (fraction of base speed).
pub const ENEMY_SPEED_STEP: f32 = 0.1;

// --- Player ---

/// Player hitbox size (square, pixels).
pub const PLAYER_SIZE: f32 = 60.0;

/// Lives at the start of a run.
pub const PLAYER_START_LIVES: u32 = 3;

/// Player spawn height above the bottom edge.
pub const PLAYER_SPAWN_BOTTOM_OFFSET: f32 = 120.0;

/// Exponential smoothing factor for steering toward the input target.
pub const PLAYER_STEER_FACTOR: f32 = 0.15;

/// Maximum spread level (bullet pattern).
pub const POWER_LEVEL_MAX: u8 = 3;

/// Maximum fire rate level.
pub const FIRE_RATE_LEVEL_MAX: u8 = 4;

/// Maximum damage level.
pub const DAMAGE_LEVEL_MAX: u8 = 5;

/// Invincibility window after a non-fatal hit, in ticks (~2 seconds).
pub const INVINCIBILITY_TICKS: u32 = 120;

/// Blink period while invincible; the ship is visible for the first half.
pub const INVINCIBILITY_BLINK_PERIOD: u32 = 10;

// --- Player fire ---

/// Base interval between shots in milliseconds.
pub const FIRE_INTERVAL_BASE_MS: f64 = 150.0;

/// Shortest possible interval between shots.
pub const FIRE_INTERVAL_MIN_MS: f64 = 60.0;

/// Interval reduction per fire rate level above 1.
pub const FIRE_INTERVAL_STEP_MS: f64 = 30.0;

/// Player bullet vertical speed (negative = up), independent of level.
pub const PLAYER_BULLET_SPEED: f32 = -14.0;

/// Bullets spawn this far above the ship center.
pub const MUZZLE_OFFSET_Y: f32 = 30.0;

/// Horizontal offset of the twin-shot pair (power level 2).
pub const TWIN_SHOT_OFFSET_X: f32 = 15.0;

/// Horizontal offset of the angled pair (power level 3).
pub const ANGLED_SHOT_OFFSET_X: f32 = 25.0;

/// The angled pair spawns slightly lower than the straight shot.
pub const ANGLED_SHOT_OFFSET_Y: f32 = 20.0;

/// Horizontal speed of the angled pair (outward).
pub const ANGLED_SHOT_SPEED_X: f32 = 2.0;

// --- Enemies ---

/// Base interval between enemy spawns in milliseconds.
pub const SPAWN_INTERVAL_BASE_MS: f64 = 1_600.0;

/// Spawn interval floor regardless of difficulty.
pub const SPAWN_INTERVAL_MIN_MS: f64 = 300.0;

/// Enemy bullet vertical speed (downward).
pub const ENEMY_BULLET_SPEED: f32 = 6.0;

/// Enemy bullet damage, flat regardless of level or class.
pub const ENEMY_BULLET_DAMAGE: u32 = 1;

// --- Collision ---

/// Fraction of combined sizes used for the enemy-vs-player body test.
pub const BODY_COLLISION_FACTOR: f32 = 0.35;

/// Divisor applied to the player size for the enemy-bullet-vs-player test
/// (a deliberately tighter hitbox than the body test).
pub const PLAYER_BULLET_HITBOX_DIVISOR: f32 = 4.0;

// --- Power-ups ---

/// Probability that a destroyed enemy drops a power-up.
pub const POWER_UP_DROP_CHANCE: f64 = 0.15;

/// Power-up hitbox size (square, pixels).
pub const POWER_UP_SIZE: f32 = 30.0;

/// Power-up fall speed (pixels per tick).
pub const POWER_UP_FALL_SPEED: f32 = 2.0;

// --- Effects ---

/// Screen shake magnitude when the player is hit.
pub const SHAKE_ON_PLAYER_HIT: f32 = 15.0;

/// Screen shake magnitude when an enemy is destroyed.
pub const SHAKE_ON_KILL: f32 = 5.0;

/// Screen shake decay per tick.
pub const SHAKE_DECAY: f32 = 0.5;

/// Particle life lost per tick (life starts at 1.0).
pub const PARTICLE_LIFE_DECAY: f32 = 0.025;

/// Particle velocity spread: each axis is uniform in ± half of this.
pub const PARTICLE_VELOCITY_SPREAD: f32 = 12.0;

/// Particle size range: uniform in [min, min + range).
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_RANGE: f32 = 5.0;

/// Particle counts per effect.
pub const EXPLOSION_PLAYER_HIT_PARTICLES: usize = 30;
pub const EXPLOSION_KILL_PARTICLES: usize = 15;
pub const PICKUP_BURST_PARTICLES: usize = 10;
pub const HIT_SPARK_PARTICLES: usize = 3;

/// Effect colors.
pub const COLOR_PLAYER_EXPLOSION: Rgb = Rgb::new(255, 255, 255);
pub const COLOR_KILL_EXPLOSION: Rgb = Rgb::new(245, 158, 11);
pub const COLOR_PICKUP_BURST: Rgb = Rgb::new(16, 185, 129);
pub const COLOR_HIT_SPARK: Rgb = Rgb::new(255, 255, 255);

// --- Bounds pruning ---

/// Bullets are removed once outside the arena by this margin on any side.
pub const BULLET_BOUNDS_MARGIN: f32 = 50.0;

/// Enemies are removed once past the bottom edge by this margin.
pub const ENEMY_BOUNDS_MARGIN: f32 = 100.0;

/// Power-ups are removed once past the bottom edge by this margin.
pub const POWER_UP_BOUNDS_MARGIN: f32 = 50.0;

// --- Display ---

/// Background scroll advance per tick (wraps at arena height).
pub const BACKGROUND_SCROLL_SPEED: f32 = 3.0;
