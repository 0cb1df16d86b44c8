//! Events emitted by the simulation for the shell's UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyClass, PowerUpKind};

/// One-shot events drained into each frame snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new stage began.
    StageAdvanced { level: u32 },
    /// An enemy was destroyed by player fire (not by body collision).
    EnemyDestroyed { class: EnemyClass, score_value: u32 },
    /// The player collected a power-up.
    PowerUpCollected { kind: PowerUpKind },
    /// The player lost a life.
    PlayerHit { lives_remaining: u32 },
    /// Terminal: the run ended. Emitted exactly once per run.
    GameOver { final_score: u64 },
}
