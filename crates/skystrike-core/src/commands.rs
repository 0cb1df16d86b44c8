//! Player commands and the per-tick input register.
//!
//! Lifecycle commands are queued and applied at the next tick boundary.
//! Pointer input is not a command: it is a last-write-wins register the
//! shell overwrites asynchronously and the engine reads once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, PLAYER_SPAWN_BOTTOM_OFFSET};

/// Run-lifecycle actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new run: reset all entities, stats, and timers.
    StartRun,
    /// Return to the main menu from the game-over screen.
    ReturnToMenu,
}

/// Pointer state read once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Steering target in arena coordinates, pre-clamped by the shell.
    pub target: Vec2,
    /// Whether the fire control is held.
    pub fire_held: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            target: Vec2::new(
                ARENA_WIDTH / 2.0,
                ARENA_HEIGHT - PLAYER_SPAWN_BOTTOM_OFFSET,
            ),
            fire_held: false,
        }
    }
}
