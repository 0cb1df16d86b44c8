//! State shared between the game loop thread and the terminal front end.

use std::sync::{Arc, Mutex};

use skystrike_core::commands::{InputState, PlayerCommand};
use skystrike_core::state::FrameSnapshot;

/// Commands sent from the front end to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A lifecycle command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared state between the front end and the game loop thread.
///
/// The input register is last-write-wins: the front end overwrites it on
/// every pointer/key event and the engine reads it once per tick. The
/// snapshot slot holds the latest frame for the renderer to poll.
#[derive(Clone, Default)]
pub struct SharedState {
    pub input: Arc<Mutex<InputState>>,
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the input register (front end side).
    pub fn store_input(&self, input: InputState) {
        if let Ok(mut slot) = self.input.lock() {
            *slot = input;
        }
    }

    /// Read the input register (game loop side).
    pub fn load_input(&self) -> InputState {
        self.input
            .lock()
            .map(|slot| *slot)
            .unwrap_or_default()
    }

    /// Fetch the latest snapshot, if any tick has completed yet.
    pub fn load_snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
    }
}
