//! Stage progression: the stage clock, level-ups, and difficulty scaling.

use skystrike_core::constants::{BANNER_DURATION_MS, DIFFICULTY_STEP, STAGE_LENGTH_MS, TICK_MS};
use skystrike_core::enums::BannerKind;
use skystrike_core::events::GameEvent;

use crate::engine::{Banner, RunState};

/// Difficulty multiplier for a level. Scales the enemy spawn cadence and
/// every enemy's fire cadence; grows linearly without an upper cap.
pub fn difficulty_factor(level: u32) -> f64 {
    1.0 + level.saturating_sub(1) as f64 * DIFFICULTY_STEP
}

/// Stage progress percentage in [0, 100] for display.
pub fn stage_progress(run: &RunState) -> f64 {
    (run.stage_time_ms / STAGE_LENGTH_MS * 100.0).min(100.0)
}

/// Advance the stage clock; roll over into the next level when it fills.
pub fn run(run: &mut RunState, events: &mut Vec<GameEvent>) {
    run.stage_time_ms += TICK_MS;

    if run.stage_time_ms >= STAGE_LENGTH_MS {
        run.stage_time_ms = 0.0;
        run.level += 1;
        run.banner = Some(Banner {
            kind: BannerKind::Stage(run.level),
            remaining_ms: BANNER_DURATION_MS,
        });
        events.push(GameEvent::StageAdvanced { level: run.level });
        tracing::info!(level = run.level, "stage advanced");
    }
}
