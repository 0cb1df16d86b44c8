//! Game loop thread — runs the simulation engine at a fixed 16 ms step.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Lifecycle commands arrive via `mpsc` channel; the pointer
//! register and the latest snapshot are shared through `SharedState`.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use skystrike_core::constants::TICK_MS;
use skystrike_sim::engine::{GameEngine, SimConfig};

use crate::state::{GameLoopCommand, SharedState};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_MS as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the front end to use.
pub fn spawn_game_loop(config: SimConfig, shared: SharedState) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skystrike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &shared);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    shared: &SharedState,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Read the input register once and advance one tick
        let snapshot = engine.tick(shared.load_input());

        // 3. Publish the snapshot for the renderer
        if let Ok(mut slot) = shared.latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
