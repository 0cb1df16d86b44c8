#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{InputState, PlayerCommand};
    use crate::components::PlayerShip;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::FrameSnapshot;
    use crate::types::{GameTime, Position, Rgb, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::MainMenu, GamePhase::Active, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_class_serde() {
        for v in EnemyClass::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyClass = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_power_up_kind_serde() {
        for v in PowerUpKind::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: PowerUpKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_bullet_owner_serde() {
        let variants = vec![BulletOwner::Player, BulletOwner::Enemy];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BulletOwner = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_banner_kind_serde() {
        let variants = vec![BannerKind::MissionStart, BannerKind::Stage(7)];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BannerKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_serde_tagged() {
        let json = serde_json::to_string(&PlayerCommand::StartRun).unwrap();
        assert!(json.contains("\"type\""), "commands are externally tagged: {json}");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerCommand::StartRun);
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::StageAdvanced { level: 2 },
            GameEvent::EnemyDestroyed {
                class: EnemyClass::Bomber,
                score_value: 500,
            },
            GameEvent::PowerUpCollected {
                kind: PowerUpKind::Fast,
            },
            GameEvent::PlayerHit { lives_remaining: 2 },
            GameEvent::GameOver { final_score: 12_345 },
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    // ---- Type helpers ----

    #[test]
    fn test_game_time_advance() {
        let mut time = GameTime::default();
        for _ in 0..10 {
            time.advance();
        }
        assert_eq!(time.tick, 10);
        assert!((time.elapsed_ms - 10.0 * TICK_MS).abs() < 1e-9);
    }

    #[test]
    fn test_position_velocity_distinct_types() {
        // Both wrap Vec2 but must stay separate component types.
        let p = Position::new(1.0, 2.0);
        let v = Velocity::new(3.0, 4.0);
        assert_eq!(p.0, Vec2::new(1.0, 2.0));
        assert_eq!(v.0, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_player_ship_defaults() {
        let ship = PlayerShip::default();
        assert_eq!(ship.lives, PLAYER_START_LIVES);
        assert_eq!(ship.power_level, 1);
        assert_eq!(ship.fire_rate_level, 1);
        assert_eq!(ship.damage_level, 1);
        assert!((ship.size - PLAYER_SIZE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_input_rests_at_spawn() {
        let input = InputState::default();
        assert!(!input.fire_held);
        assert!((input.target.x - ARENA_WIDTH / 2.0).abs() < f32::EPSILON);
        assert!((input.target.y - (ARENA_HEIGHT - PLAYER_SPAWN_BOTTOM_OFFSET)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snap = FrameSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.player.is_none());
        assert!(back.enemies.is_empty());
    }

    #[test]
    fn test_rgb_const_colors() {
        assert_eq!(COLOR_KILL_EXPLOSION, Rgb::new(245, 158, 11));
        assert_eq!(COLOR_PICKUP_BURST, Rgb::new(16, 185, 129));
    }
}
