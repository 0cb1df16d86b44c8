use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing_subscriber::EnvFilter;

use skystrike_app::display::{self, Viewport};
use skystrike_app::game_loop::{spawn_game_loop, TICK_DURATION};
use skystrike_app::input::InputTracker;
use skystrike_app::state::{GameLoopCommand, SharedState};
use skystrike_core::commands::PlayerCommand;
use skystrike_core::enums::GamePhase;
use skystrike_sim::engine::SimConfig;

// ── High-score persistence ────────────────────────────────────────────────────

fn high_score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".skystrike_score")
}

fn load_high_score() -> u64 {
    std::fs::read_to_string(high_score_path())
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn save_high_score(score: u64) {
    let _ = std::fs::write(high_score_path(), score.to_string());
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Logs go to stderr so they never tear the alternate screen; enable
    // with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release events where the terminal supports them; others
    // fall back to the hold-window in InputTracker.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the render loop never
    // has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut high_score = load_high_score();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(42);
    let shared = SharedState::new();
    let cmd_tx = spawn_game_loop(SimConfig { seed }, shared.clone());

    let mut tracker = InputTracker::new();
    let mut frame: u64 = 0;
    let mut phase = GamePhase::MainMenu;
    let mut best_recorded = false;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let (cols, rows) = terminal::size()?;
        let viewport = Viewport::centered(cols, rows);

        // ── Drain input events ────────────────────────────────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) = &ev
            {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        let _ = cmd_tx.send(GameLoopCommand::Shutdown);
                        return Ok(());
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        let _ = cmd_tx.send(GameLoopCommand::Shutdown);
                        return Ok(());
                    }
                    KeyCode::Enter if phase == GamePhase::MainMenu => {
                        let _ = cmd_tx.send(GameLoopCommand::Player(PlayerCommand::StartRun));
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') if phase == GamePhase::GameOver => {
                        let _ = cmd_tx.send(GameLoopCommand::Player(PlayerCommand::StartRun));
                    }
                    KeyCode::Char('m') | KeyCode::Char('M') if phase == GamePhase::GameOver => {
                        let _ = cmd_tx.send(GameLoopCommand::Player(PlayerCommand::ReturnToMenu));
                    }
                    _ => {}
                }
            }
            tracker.handle_event(&ev, viewport, frame);
        }

        // ── Publish the input register and render the latest frame ────────────
        shared.store_input(tracker.state(frame));

        match shared.load_snapshot() {
            Some(snap) => {
                phase = snap.phase;
                match phase {
                    GamePhase::MainMenu => display::draw_menu(out, high_score)?,
                    GamePhase::Active => {
                        best_recorded = false;
                        display::render(out, &snap, viewport, high_score)?;
                    }
                    GamePhase::GameOver => {
                        if !best_recorded {
                            best_recorded = true;
                            if snap.score > high_score {
                                high_score = snap.score;
                                save_high_score(high_score);
                            }
                            tracing::info!(score = snap.score, high_score, "run ended");
                        }
                        display::render(out, &snap, viewport, high_score)?;
                    }
                }
            }
            None => display::draw_menu(out, high_score)?,
        }

        // ── Hold the frame cadence ────────────────────────────────────────────
        let elapsed = frame_start.elapsed();
        if elapsed < TICK_DURATION {
            thread::sleep(TICK_DURATION - elapsed);
        }
    }
}
