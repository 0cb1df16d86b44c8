//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in logical arena space (pixels, origin top-left, y down).
///
/// Wraps `glam::Vec2` so Position and Velocity stay distinct component
/// types in the ECS world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in arena units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// An RGB color handed to the renderer, e.g. for particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Simulation time tracking.
///
/// The simulation is fixed-step: every tick advances the clock by exactly
/// `TICK_MS` regardless of wall time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl GameTime {
    /// Milliseconds per tick.
    pub fn dt_ms(&self) -> f64 {
        crate::constants::TICK_MS
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += self.dt_ms();
    }
}
