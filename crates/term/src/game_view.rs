//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O). The playfield is drawn at a fixed scale of field units per
//! terminal cell, so one frame always covers the whole field and overlaps are
//! easy to reason about in tests.

use crate::core::{GameSnapshot, ObstacleSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameConfig, RunPhase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const SKY_TOP: Rgb = Rgb::new(70, 130, 200);
const SKY_BOTTOM: Rgb = Rgb::new(160, 210, 235);
const PIPE_FG: Rgb = Rgb::new(60, 170, 70);
const PIPE_EDGE: Rgb = Rgb::new(30, 110, 40);
const GRASS: Rgb = Rgb::new(90, 180, 60);
const DIRT_FG: Rgb = Rgb::new(150, 110, 60);
const DIRT_BG: Rgb = Rgb::new(200, 160, 90);
const BIRD_FG: Rgb = Rgb::new(250, 210, 50);
const BLACK: Rgb = Rgb::new(0, 0, 0);

pub const PIPE_GLYPH: char = '█';
pub const BIRD_GLYPH: char = '▇';
const DIRT_PATTERN: [char; 4] = ['▒', '░', '░', '▒'];

/// A terminal renderer for the flappy playfield.
pub struct GameView {
    /// Field units covered by one terminal column.
    units_per_col: f64,
    /// Field units covered by one terminal row.
    units_per_row: f64,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are about twice as tall as wide, so a column covers
        // half the units of a row. The default field maps to 20x20 cells.
        Self {
            units_per_col: 20.0,
            units_per_row: 40.0,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the playfield landed on screen.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    /// Inner size, without the border.
    cols: u16,
    rows: u16,
}

impl Frame {
    fn outer_w(&self) -> u16 {
        self.cols + 2
    }

    fn outer_h(&self) -> u16 {
        self.rows + 2
    }
}

impl GameView {
    pub fn new(units_per_col: f64, units_per_row: f64) -> Self {
        Self {
            units_per_col: units_per_col.max(1.0),
            units_per_row: units_per_row.max(1.0),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Inner playfield size in cells for `config`.
    pub fn field_cells(&self, config: &GameConfig) -> (u16, u16) {
        let cols = (config.field_width / self.units_per_col).ceil().max(1.0) as u16;
        let rows = (config.field_height / self.units_per_row).ceil().max(1.0) as u16;
        (cols, rows)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let cfg = &snap.config;
        let (cols, rows) = self.field_cells(cfg);
        let frame_w = cols + 2;
        let frame_h = rows + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            cols,
            rows,
        };

        self.draw_sky(fb, &frame);
        self.draw_ground(fb, &frame, snap);
        for obstacle in &snap.obstacles {
            self.draw_obstacle(fb, &frame, cfg, obstacle);
        }
        self.draw_bird(fb, &frame, snap);

        let border = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        draw_border(fb, frame.x, frame.y, frame_w, frame_h, border);

        self.draw_side_panel(fb, snap, viewport, &frame);

        match snap.phase {
            RunPhase::Ready => self.draw_ready_overlay(fb, &frame),
            RunPhase::Over => self.draw_game_over_overlay(fb, &frame, snap),
            RunPhase::Idle | RunPhase::Active => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Half-open cell span covering field units `[from, to)` on one axis.
    fn span(from: f64, to: f64, units: f64, limit: u16) -> (u16, u16) {
        let a = (from / units).floor().clamp(0.0, limit as f64) as u16;
        let b = (to / units).ceil().clamp(0.0, limit as f64) as u16;
        (a, b)
    }

    fn sky_style(frame: &Frame, row: u16) -> CellStyle {
        let t = if frame.rows > 1 {
            row as f64 / (frame.rows - 1) as f64
        } else {
            0.0
        };
        CellStyle::new(BLACK, Rgb::lerp(SKY_TOP, SKY_BOTTOM, t))
    }

    fn draw_sky(&self, fb: &mut FrameBuffer, frame: &Frame) {
        for row in 0..frame.rows {
            let style = Self::sky_style(frame, row);
            fb.fill_rect(frame.x + 1, frame.y + 1 + row, frame.cols, 1, ' ', style);
        }
    }

    fn draw_ground(&self, fb: &mut FrameBuffer, frame: &Frame, snap: &GameSnapshot) {
        let cfg = &snap.config;
        let (top, bottom) =
            Self::span(cfg.ground_top(), cfg.field_height, self.units_per_row, frame.rows);
        if top >= bottom {
            return;
        }

        // The texture scrolls with the obstacles and stands still once they do.
        let scrolled = snap.tick as f64 * cfg.obstacle_speed / self.units_per_col;
        let offset = (scrolled.floor() as u64 % DIRT_PATTERN.len() as u64) as usize;

        let grass = CellStyle::new(GRASS, DIRT_BG).bold();
        let dirt = CellStyle::new(DIRT_FG, DIRT_BG);
        for row in top..bottom {
            for col in 0..frame.cols {
                let (ch, style) = if row == top {
                    ('▀', grass)
                } else {
                    let i = (col as usize + offset + row as usize) % DIRT_PATTERN.len();
                    (DIRT_PATTERN[i], dirt)
                };
                fb.put_char(frame.x + 1 + col, frame.y + 1 + row, ch, style);
            }
        }
    }

    fn draw_obstacle(
        &self,
        fb: &mut FrameBuffer,
        frame: &Frame,
        cfg: &GameConfig,
        o: &ObstacleSnapshot,
    ) {
        let (left, right) =
            Self::span(o.x, o.x + cfg.obstacle_width, self.units_per_col, frame.cols);
        if left >= right {
            return;
        }

        let rows = frame.rows;
        let upr = self.units_per_row;
        let (_, upper_end) = Self::span(0.0, o.gap_height, upr, rows);
        let (ground_row, _) = Self::span(cfg.ground_top(), cfg.field_height, upr, rows);
        let (lower_start, _) = Self::span(o.gap_bottom(cfg.gap_size), cfg.ground_top(), upr, rows);

        for row in (0..upper_end).chain(lower_start..ground_row) {
            let bg = Self::sky_style(frame, row).bg;
            for col in left..right {
                let fg = if col == left || col + 1 == right {
                    PIPE_EDGE
                } else {
                    PIPE_FG
                };
                let (x, y) = (frame.x + 1 + col, frame.y + 1 + row);
                fb.put_char(x, y, PIPE_GLYPH, CellStyle::new(fg, bg));
            }
        }
    }

    fn draw_bird(&self, fb: &mut FrameBuffer, frame: &Frame, snap: &GameSnapshot) {
        let cfg = &snap.config;
        let (left, right) =
            Self::span(cfg.bird_left(), cfg.bird_right(), self.units_per_col, frame.cols);

        if snap.bird_y + cfg.bird_height <= 0.0 {
            // Above the field: keep a marker on the top row so the bird is never lost.
            let style = CellStyle::new(BIRD_FG, Self::sky_style(frame, 0).bg).bold();
            let mid = left + (right.saturating_sub(left)) / 2;
            fb.put_char(frame.x + 1 + mid, frame.y + 1, '^', style);
            return;
        }

        let bottom_y = snap.bird_y + cfg.bird_height;
        let (top, bottom) = Self::span(snap.bird_y, bottom_y, self.units_per_row, frame.rows);
        for row in top..bottom {
            let style = CellStyle::new(BIRD_FG, Self::sky_style(frame, row).bg).bold();
            for col in left..right {
                fb.put_char(frame.x + 1 + col, frame.y + 1 + row, BIRD_GLYPH, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: &Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.outer_w()).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        let dim = CellStyle { dim: true, ..value };

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, phase_label(snap.phase), value);
        y = y.saturating_add(2);

        for line in ["SPACE flap", "ENTER start", "R restart", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_ready_overlay(&self, fb: &mut FrameBuffer, frame: &Frame) {
        let mid_y = frame.y.saturating_add(frame.outer_h() / 2);
        put_centered(fb, frame, mid_y.saturating_sub(1), "PRESS ENTER", overlay_style());
        put_centered(fb, frame, mid_y.saturating_add(1), "SPACE TO FLAP", overlay_style());
    }

    fn draw_game_over_overlay(&self, fb: &mut FrameBuffer, frame: &Frame, snap: &GameSnapshot) {
        let style = overlay_style();
        let mut y = frame.y.saturating_add(frame.outer_h() / 2).saturating_sub(2);
        put_centered(fb, frame, y, "GAME OVER", style);
        y = y.saturating_add(1);

        // "SCORE <n>" without formatting into a String.
        let text_w = 6 + digit_count(snap.score);
        let x = frame.x.saturating_add(frame.outer_w().saturating_sub(text_w) / 2);
        let after = fb.put_str(x, y, "SCORE ", style);
        fb.put_u32(after, y, snap.score, style);
        y = y.saturating_add(1);

        if snap.new_best {
            let best = CellStyle::new(BIRD_FG, BLACK).bold();
            put_centered(fb, frame, y, "NEW BEST!", best);
            y = y.saturating_add(1);
        }
        put_centered(fb, frame, y.saturating_add(1), "R TO RESTART", style);
    }
}

fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold()
}

fn put_centered(fb: &mut FrameBuffer, frame: &Frame, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.outer_w().saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn phase_label(phase: RunPhase) -> &'static str {
    match phase {
        RunPhase::Idle => "IDLE",
        RunPhase::Ready => "READY",
        RunPhase::Active => "FLYING",
        RunPhase::Over => "GAME OVER",
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn span_rounds_outward_and_clips() {
        assert_eq!(GameView::span(175.0, 225.0, 20.0, 20), (8, 12));
        assert_eq!(GameView::span(-30.0, 20.0, 20.0, 20), (0, 1));
        assert_eq!(GameView::span(390.0, 440.0, 20.0, 20), (19, 20));
        assert_eq!(GameView::span(420.0, 470.0, 20.0, 20), (20, 20));
    }

    #[test]
    fn default_field_is_twenty_by_twenty() {
        let view = GameView::default();
        assert_eq!(view.field_cells(&GameConfig::default()), (20, 20));
    }
}
