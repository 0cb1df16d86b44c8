//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable frame
//! snapshot. No game logic is performed; this module only translates
//! snapshots into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use glam::Vec2;

use skystrike_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, PLAYER_START_LIVES};
use skystrike_core::enums::{BannerKind, BulletOwner, EnemyClass, GamePhase, PowerUpKind};
use skystrike_core::state::FrameSnapshot;
use skystrike_core::types::Rgb;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Arena cells drawn on screen: one cell covers 10 × 20 logical pixels.
pub const VIEW_COLS: u16 = 45;
pub const VIEW_ROWS: u16 = 40;

/// Maps logical arena coordinates to terminal cells and back.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub origin_col: u16,
    pub origin_row: u16,
}

impl Viewport {
    /// Center the arena in a terminal of the given size.
    pub fn centered(term_cols: u16, term_rows: u16) -> Self {
        Self {
            origin_col: term_cols.saturating_sub(VIEW_COLS) / 2,
            origin_row: term_rows.saturating_sub(VIEW_ROWS) / 2,
        }
    }

    /// Terminal cell of an arena position, or None when off screen.
    pub fn cell_of(&self, p: Vec2) -> Option<(u16, u16)> {
        if p.x < 0.0 || p.x >= ARENA_WIDTH || p.y < 0.0 || p.y >= ARENA_HEIGHT {
            return None;
        }
        let col = ((p.x / ARENA_WIDTH) * f32::from(VIEW_COLS)) as u16;
        let row = ((p.y / ARENA_HEIGHT) * f32::from(VIEW_ROWS)) as u16;
        Some((
            self.origin_col + col.min(VIEW_COLS - 1),
            self.origin_row + row.min(VIEW_ROWS - 1),
        ))
    }

    /// Arena position at the center of a terminal cell, clamped to the arena.
    pub fn arena_of(&self, col: u16, row: u16) -> Vec2 {
        let cx = f32::from(col.saturating_sub(self.origin_col)) + 0.5;
        let cy = f32::from(row.saturating_sub(self.origin_row)) + 0.5;
        Vec2::new(
            (cx * ARENA_WIDTH / f32::from(VIEW_COLS)).clamp(0.0, ARENA_WIDTH),
            (cy * ARENA_HEIGHT / f32::from(VIEW_ROWS)).clamp(0.0, ARENA_HEIGHT),
        )
    }
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY_SCOUT: Color = Color::Green;
const C_ENEMY_RAIDER: Color = Color::Yellow;
const C_ENEMY_BOMBER: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_POWER_SPREAD: Color = Color::Green;
const C_POWER_FAST: Color = Color::Blue;
const C_POWER_POWER: Color = Color::Red;
const C_BACKDROP: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;
const C_PROGRESS: Color = Color::Blue;
const C_BANNER: Color = Color::Cyan;

fn color_of(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn enemy_glyph(class: EnemyClass) -> (char, Color) {
    match class {
        EnemyClass::Scout => ('v', C_ENEMY_SCOUT),
        EnemyClass::Raider => ('V', C_ENEMY_RAIDER),
        EnemyClass::Bomber => ('W', C_ENEMY_BOMBER),
    }
}

fn power_up_glyph(kind: PowerUpKind) -> (char, Color) {
    match kind {
        PowerUpKind::Spread => ('S', C_POWER_SPREAD),
        PowerUpKind::Fast => ('F', C_POWER_FAST),
        PowerUpKind::Power => ('P', C_POWER_POWER),
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    snap: &FrameSnapshot,
    viewport: Viewport,
    high_score: u64,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    // Screen shake: nudge the whole field one cell while shake is active.
    let viewport = shaken(viewport, snap);

    draw_border(out, viewport)?;
    draw_hud(out, snap, viewport, high_score)?;
    draw_backdrop(out, snap, viewport)?;

    for particle in &snap.particles {
        draw_glyph(out, viewport, particle.position, '·', color_of(particle.color))?;
    }
    for power_up in &snap.power_ups {
        let (glyph, color) = power_up_glyph(power_up.kind);
        draw_glyph(out, viewport, power_up.position, glyph, color)?;
    }
    for bullet in &snap.bullets {
        let (glyph, color) = match bullet.owner {
            BulletOwner::Player => ('|', C_BULLET_PLAYER),
            BulletOwner::Enemy => ('•', C_BULLET_ENEMY),
        };
        draw_glyph(out, viewport, bullet.position, glyph, color)?;
    }
    for enemy in &snap.enemies {
        let (glyph, color) = enemy_glyph(enemy.class);
        // A wounded enemy dims instead of carrying a health bar.
        let color = if enemy.hp_fraction < 0.5 {
            Color::DarkGrey
        } else {
            color
        };
        draw_glyph(out, viewport, enemy.position, glyph, color)?;
    }
    if let Some(player) = &snap.player {
        if player.visible {
            draw_glyph(out, viewport, player.position, '▲', C_PLAYER)?;
        }
    }

    if let Some(banner) = &snap.banner {
        let text = match banner.kind {
            BannerKind::MissionStart => "MISSION START".to_string(),
            BannerKind::Stage(level) => format!("STAGE {level}"),
        };
        draw_centered(
            out,
            viewport,
            viewport.origin_row + VIEW_ROWS / 3,
            &text,
            C_BANNER,
        )?;
    }

    if snap.phase == GamePhase::GameOver {
        draw_game_over(out, snap, viewport, high_score)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.origin_row + VIEW_ROWS + 2))?;
    out.flush()?;
    Ok(())
}

/// Render the start menu.
pub fn draw_menu<W: Write>(out: &mut W, high_score: u64) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  SKY  STRIKE  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if high_score > 0 {
        let hs = format!("Best Score: {high_score}");
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs.chars().count() as u16 / 2),
            cy.saturating_sub(4),
        ))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(&hs))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Press ENTER to scramble"))?;

    // Power-up legend
    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 2))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Power-ups (catch falling items):"))?;
    let legend: &[(char, Color, &str)] = &[
        ('S', C_POWER_SPREAD, " Spread — wider volley"),
        ('F', C_POWER_FAST, " Fast   — quicker trigger"),
        ('P', C_POWER_POWER, " Power  — heavier rounds"),
    ];
    for (i, (glyph, color, desc)) in legend.iter().enumerate() {
        out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 3 + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*glyph))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(*desc))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 7))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Mouse / ← → ↑ ↓ : steer   SPACE / click : fire   Q : quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Frame pieces ──────────────────────────────────────────────────────────────

fn shaken(viewport: Viewport, snap: &FrameSnapshot) -> Viewport {
    if snap.shake > 0.0 {
        let kick = if snap.time.tick % 2 == 0 { 1 } else { 0 };
        Viewport {
            origin_col: viewport.origin_col.saturating_sub(kick),
            origin_row: viewport.origin_row,
        }
    } else {
        viewport
    }
}

fn draw_glyph<W: Write>(
    out: &mut W,
    viewport: Viewport,
    position: Vec2,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = viewport.cell_of(position) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_centered<W: Write>(
    out: &mut W,
    viewport: Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = viewport.origin_col + VIEW_COLS / 2;
    out.queue(cursor::MoveTo(
        col.saturating_sub(text.chars().count() as u16 / 2),
        row,
    ))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, viewport: Viewport) -> std::io::Result<()> {
    let left = viewport.origin_col.saturating_sub(1);
    let right = viewport.origin_col + VIEW_COLS;
    let top = viewport.origin_row.saturating_sub(1);
    let bottom = viewport.origin_row + VIEW_ROWS;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(left, top))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(VIEW_COLS as usize))))?;
    out.queue(cursor::MoveTo(left, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(VIEW_COLS as usize))))?;

    for row in viewport.origin_row..bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hud<W: Write>(
    out: &mut W,
    snap: &FrameSnapshot,
    viewport: Viewport,
    high_score: u64,
) -> std::io::Result<()> {
    let hud_row = viewport.origin_row.saturating_sub(3);
    let bar_row = viewport.origin_row.saturating_sub(2);
    let left = viewport.origin_col.saturating_sub(1);

    // Score and best — left
    out.queue(cursor::MoveTo(left, hud_row))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("SCORE {:>8}", snap.score)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(format!("  BEST {high_score}")))?;

    // Lives and stage — right
    let lives = snap.player.map(|p| p.lives).unwrap_or(0);
    let hearts: String = (0..PLAYER_START_LIVES)
        .map(|i| if i < lives { '♥' } else { '·' })
        .collect();
    let status = format!("LV {:>2}  {hearts}", snap.level);
    out.queue(cursor::MoveTo(
        (viewport.origin_col + VIEW_COLS + 1).saturating_sub(status.chars().count() as u16),
        hud_row,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&status))?;

    // Stage progress bar across the top
    let filled = (snap.stage_progress / 100.0 * f64::from(VIEW_COLS)) as usize;
    out.queue(cursor::MoveTo(viewport.origin_col, bar_row))?;
    out.queue(style::SetForegroundColor(C_PROGRESS))?;
    out.queue(Print("═".repeat(filled.min(VIEW_COLS as usize))))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("─".repeat((VIEW_COLS as usize).saturating_sub(filled))))?;

    // Active power-up badges below the field
    if let Some(player) = &snap.player {
        let badge_row = viewport.origin_row + VIEW_ROWS + 1;
        out.queue(cursor::MoveTo(viewport.origin_col, badge_row))?;
        if player.power_level > 1 {
            out.queue(style::SetForegroundColor(C_POWER_SPREAD))?;
            out.queue(Print(format!("[SPREAD {}] ", player.power_level)))?;
        }
        if player.fire_rate_level > 1 {
            out.queue(style::SetForegroundColor(C_POWER_FAST))?;
            out.queue(Print(format!("[FAST {}] ", player.fire_rate_level)))?;
        }
        if player.damage_level > 1 {
            out.queue(style::SetForegroundColor(C_POWER_POWER))?;
            out.queue(Print(format!("[POWER {}]", player.damage_level)))?;
        }
    }

    Ok(())
}

/// Sparse star field scrolled by the background offset.
fn draw_backdrop<W: Write>(
    out: &mut W,
    snap: &FrameSnapshot,
    viewport: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BACKDROP))?;
    for i in 0..14u32 {
        let x = (i * 37 + 11) as f32 % ARENA_WIDTH;
        let y = ((i * 61 + 7) as f32 + snap.scroll_offset) % ARENA_HEIGHT;
        if let Some((col, row)) = viewport.cell_of(Vec2::new(x, y)) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print('·'))?;
        }
    }
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    snap: &FrameSnapshot,
    viewport: Viewport,
    high_score: u64,
) -> std::io::Result<()> {
    let mid = viewport.origin_row + VIEW_ROWS / 2;
    draw_centered(out, viewport, mid.saturating_sub(2), "MISSION FAILED", Color::Red)?;
    draw_centered(
        out,
        viewport,
        mid,
        &format!("FINAL SCORE {}", snap.score),
        Color::White,
    )?;
    if snap.score >= high_score && snap.score > 0 {
        draw_centered(out, viewport, mid + 1, "NEW BEST!", C_HUD_SCORE)?;
    }
    draw_centered(
        out,
        viewport,
        mid + 3,
        "R : retry   M : menu   Q : quit",
        C_HINT,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_round_trip() {
        let viewport = Viewport {
            origin_col: 10,
            origin_row: 5,
        };

        // Arena center lands in the middle cell and maps back near itself.
        let center = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
        let (col, row) = viewport.cell_of(center).unwrap();
        assert_eq!(col, 10 + VIEW_COLS / 2);
        assert_eq!(row, 5 + VIEW_ROWS / 2);

        let back = viewport.arena_of(col, row);
        assert!((back.x - center.x).abs() <= ARENA_WIDTH / f32::from(VIEW_COLS));
        assert!((back.y - center.y).abs() <= ARENA_HEIGHT / f32::from(VIEW_ROWS));
    }

    #[test]
    fn test_viewport_rejects_off_screen() {
        let viewport = Viewport {
            origin_col: 0,
            origin_row: 0,
        };
        assert!(viewport.cell_of(Vec2::new(-10.0, 100.0)).is_none());
        assert!(viewport.cell_of(Vec2::new(100.0, ARENA_HEIGHT + 1.0)).is_none());
    }

    #[test]
    fn test_viewport_clamps_outside_cells() {
        let viewport = Viewport {
            origin_col: 10,
            origin_row: 5,
        };
        // Cells left/above the field clamp into the arena.
        let p = viewport.arena_of(0, 0);
        assert!(p.x >= 0.0 && p.x <= ARENA_WIDTH);
        assert!(p.y >= 0.0 && p.y <= ARENA_HEIGHT);
    }
}
