//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes lifecycle commands,
//! runs all systems at a fixed logical step, and produces `FrameSnapshot`s.
//! Completely headless (no terminal dependency), enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::{InputState, PlayerCommand};
use skystrike_core::constants::{
    ARENA_HEIGHT, BACKGROUND_SCROLL_SPEED, BANNER_DURATION_MS, SHAKE_DECAY, TICK_MS,
};
use skystrike_core::enums::{BannerKind, GamePhase};
use skystrike_core::events::GameEvent;
use skystrike_core::state::FrameSnapshot;
use skystrike_core::types::GameTime;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// A banner currently displayed, counting down to auto-clear.
#[derive(Debug, Clone, Copy)]
pub struct Banner {
    pub kind: BannerKind,
    pub remaining_ms: f64,
}

/// Mutable per-run state that is not entity data: score, stage clock,
/// and the global effect timers.
#[derive(Debug, Clone)]
pub struct RunState {
    pub score: u64,
    /// Current stage level, starting at 1 and unbounded.
    pub level: u32,
    /// Milliseconds elapsed in the current stage.
    pub stage_time_ms: f64,
    /// Simulation timestamp of the last enemy spawn.
    pub last_spawn_ms: f64,
    /// Screen shake magnitude, decaying each tick.
    pub shake: f32,
    /// Remaining invincibility ticks; all hit handling is skipped while > 0.
    pub invincible_ticks: u32,
    /// Background scroll offset in [0, arena height).
    pub scroll_offset: f32,
    pub banner: Option<Banner>,
    /// Set by the player-hit handler on a fatal hit; the engine leaves the
    /// Active phase at the end of the tick.
    pub game_over: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            stage_time_ms: 0.0,
            last_spawn_ms: 0.0,
            shake: 0.0,
            invincible_ticks: 0,
            scroll_offset: 0.0,
            banner: None,
            game_over: false,
        }
    }
}

impl RunState {
    /// Fresh state for a new run, with the mission-start banner showing.
    pub fn new_run() -> Self {
        Self {
            banner: Some(Banner {
                kind: BannerKind::MissionStart,
                remaining_ms: BANNER_DURATION_MS,
            }),
            ..Default::default()
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct GameEngine {
    world: World,
    time: GameTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    run: RunState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: GameTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            run: RunState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a lifecycle command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `input` is the latest pointer register, read exactly once here.
    /// Outside the Active phase nothing mutates; the snapshot still reflects
    /// the last visible state so shells can render menus over it.
    pub fn tick(&mut self, input: InputState) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.advance_timers();
            self.run_systems(input);
            self.time.advance();

            if self.run.game_over {
                self.phase = GamePhase::GameOver;
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.run, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> GameTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u64 {
        self.run.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for test setups).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the run state.
    #[cfg(test)]
    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    /// Get a mutable reference to the run state (for test setups).
    #[cfg(test)]
    pub fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single lifecycle command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.world.clear();
                    world_setup::spawn_player(&mut self.world);
                    self.run = RunState::new_run();
                    self.time = GameTime::default();
                    self.phase = GamePhase::Active;
                    tracing::info!("run started");
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase == GamePhase::GameOver {
                    self.phase = GamePhase::MainMenu;
                }
            }
        }
    }

    /// Decay the global timers: screen shake, invincibility, the banner
    /// countdown, and the background scroll.
    fn advance_timers(&mut self) {
        let run = &mut self.run;
        if run.shake > 0.0 {
            run.shake = (run.shake - SHAKE_DECAY).max(0.0);
        }
        run.invincible_ticks = run.invincible_ticks.saturating_sub(1);
        run.scroll_offset = (run.scroll_offset + BACKGROUND_SCROLL_SPEED) % ARENA_HEIGHT;
        if let Some(banner) = &mut run.banner {
            banner.remaining_ms -= TICK_MS;
            if banner.remaining_ms <= 0.0 {
                run.banner = None;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: InputState) {
        // 1. Stage clock and level-ups
        systems::progression::run(&mut self.run, &mut self.events);
        // 2. Player steering and automatic fire
        systems::player_control::run(&mut self.world, &self.time, input);
        // 3. Enemy spawn check
        systems::spawner::run(&mut self.world, &mut self.rng, &mut self.run, &self.time);
        // 4. Velocity integration and particle fade
        systems::movement::run(&mut self.world);
        systems::movement::fade_particles(&mut self.world);
        // 5. Enemy fire
        systems::enemy_fire::run(&mut self.world, &self.time, self.run.level);
        // 6. Collisions: pickups, bodies, bullets
        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.run,
            &mut self.events,
        );
        // 7. Prune dead and out-of-bounds entities
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
