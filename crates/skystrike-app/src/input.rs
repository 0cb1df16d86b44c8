//! Input tracking — maps terminal pointer/key events to the logical arena.
//!
//! Mouse movement and drags steer the target directly; arrow keys nudge
//! it. Works on two classes of terminal: keyboard-enhancement capable
//! ones deliver real press/release events, while classic terminals only
//! repeat presses, so a held fire key expires after a short window of
//! silence (shorter than the OS key-repeat interval keeps it alive).

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use glam::Vec2;

use skystrike_core::commands::InputState;
use skystrike_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};

use crate::display::Viewport;

/// A fire key counts as held if its last press/repeat arrived within this
/// many frames.
const HOLD_WINDOW: u64 = 4;

/// Arena units one arrow-key press nudges the target.
const KEY_STEP_X: f32 = 30.0;
const KEY_STEP_Y: f32 = 40.0;

/// Folds terminal events into the per-tick input register.
pub struct InputTracker {
    target: Vec2,
    mouse_held: bool,
    /// Frame at which the fire key was last seen pressed/repeating.
    fire_key_seen: Option<u64>,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self {
            target: InputState::default().target,
            mouse_held: false,
            fire_key_seen: None,
        }
    }
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one terminal event into the tracker. `frame` stamps key holds.
    pub fn handle_event(&mut self, event: &Event, viewport: Viewport, frame: u64) {
        match event {
            Event::Mouse(MouseEvent {
                kind, column, row, ..
            }) => match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.mouse_held = true;
                    self.target = viewport.arena_of(*column, *row);
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    self.mouse_held = false;
                }
                MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                    self.target = viewport.arena_of(*column, *row);
                }
                _ => {}
            },
            Event::Key(KeyEvent { code, kind, .. }) => match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => match code {
                    KeyCode::Char(' ') => self.fire_key_seen = Some(frame),
                    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                        self.nudge(-KEY_STEP_X, 0.0);
                    }
                    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                        self.nudge(KEY_STEP_X, 0.0);
                    }
                    KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                        self.nudge(0.0, -KEY_STEP_Y);
                    }
                    KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                        self.nudge(0.0, KEY_STEP_Y);
                    }
                    _ => {}
                },
                KeyEventKind::Release => {
                    if *code == KeyCode::Char(' ') {
                        self.fire_key_seen = None;
                    }
                }
            },
            _ => {}
        }
    }

    /// The register value for this frame.
    pub fn state(&self, frame: u64) -> InputState {
        let fire_key_held = self
            .fire_key_seen
            .map(|last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false);
        InputState {
            target: self.target,
            fire_held: self.mouse_held || fire_key_held,
        }
    }

    fn nudge(&mut self, dx: f32, dy: f32) {
        self.target = Vec2::new(
            (self.target.x + dx).clamp(0.0, ARENA_WIDTH),
            (self.target.y + dy).clamp(0.0, ARENA_HEIGHT),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn viewport() -> Viewport {
        Viewport {
            origin_col: 0,
            origin_row: 0,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind,
            state: KeyEventState::empty(),
        })
    }

    #[test]
    fn test_mouse_move_sets_target_in_arena() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(&mouse(MouseEventKind::Moved, 10, 10), viewport(), 1);

        let input = tracker.state(1);
        assert!(input.target.x > 0.0 && input.target.x < ARENA_WIDTH);
        assert!(input.target.y > 0.0 && input.target.y < ARENA_HEIGHT);
        assert!(!input.fire_held);
    }

    #[test]
    fn test_mouse_button_drives_fire() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 5, 5),
            viewport(),
            1,
        );
        assert!(tracker.state(1).fire_held);

        tracker.handle_event(
            &mouse(MouseEventKind::Up(MouseButton::Left), 5, 5),
            viewport(),
            2,
        );
        assert!(!tracker.state(2).fire_held);
    }

    #[test]
    fn test_fire_key_expires_after_hold_window() {
        let mut tracker = InputTracker::new();
        tracker.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Press), viewport(), 10);

        assert!(tracker.state(10).fire_held);
        assert!(tracker.state(10 + HOLD_WINDOW).fire_held);
        assert!(!tracker.state(11 + HOLD_WINDOW).fire_held, "hold expires");

        // A repeat refreshes the window; an explicit release ends it.
        tracker.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Repeat), viewport(), 20);
        assert!(tracker.state(20).fire_held);
        tracker.handle_event(&key(KeyCode::Char(' '), KeyEventKind::Release), viewport(), 21);
        assert!(!tracker.state(21).fire_held);
    }

    #[test]
    fn test_key_nudges_clamp_to_arena() {
        let mut tracker = InputTracker::new();
        for _ in 0..100 {
            tracker.handle_event(&key(KeyCode::Left, KeyEventKind::Press), viewport(), 1);
            tracker.handle_event(&key(KeyCode::Up, KeyEventKind::Press), viewport(), 1);
        }
        let input = tracker.state(1);
        assert_eq!(input.target, Vec2::new(0.0, 0.0));

        for _ in 0..100 {
            tracker.handle_event(&key(KeyCode::Right, KeyEventKind::Press), viewport(), 1);
            tracker.handle_event(&key(KeyCode::Down, KeyEventKind::Press), viewport(), 1);
        }
        let input = tracker.state(1);
        assert_eq!(input.target, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT));
    }
}
