//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

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

/// Renders the board grid, score line and status overlay.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square and fits five digits.
        Self {
            tile_w: 7,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self { tile_w, tile_h }
    }

    /// Render the snapshot into a framebuffer sized to the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, &mut fb);
        fb
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.clear(Default::default());

        let size = snap.size as u16;
        let grid_w = size * self.tile_w + 2;
        let grid_h = size * self.tile_h + 2;

        let start_x = fb.width().saturating_sub(grid_w) / 2;
        // One line above the grid for the score, one below for key hints.
        let start_y = (fb.height().saturating_sub(grid_h + 2) / 2).saturating_add(1);

        let label = CellStyle {
            fg: Rgb::new(238, 228, 218),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        self.draw_score_line(fb, snap, start_x, start_y, grid_w, label);

        let border = CellStyle {
            fg: Rgb::new(187, 173, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(fb, start_x, start_y, grid_w, grid_h, border);

        for row in 0..snap.size {
            for col in 0..snap.size {
                self.draw_tile(fb, snap.get(row, col), start_x, start_y, row, col);
            }
        }

        let hints = CellStyle {
            fg: Rgb::new(119, 110, 101),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        fb.put_str(
            start_x,
            start_y + grid_h,
            "arrows move · r restart · q quit",
            hints,
        );

        match snap.status {
            GameStatus::Won => {
                self.draw_overlay_text(fb, start_x, start_y, grid_w, grid_h, "YOU WIN")
            }
            GameStatus::Lost => {
                self.draw_overlay_text(fb, start_x, start_y, grid_w, grid_h, "GAME OVER")
            }
            GameStatus::InProgress => {}
        }
    }

    fn draw_score_line(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        grid_w: u16,
        style: CellStyle,
    ) {
        let text = format!("SCORE {}", snap.score);
        let y = start_y.saturating_sub(1);
        fb.put_str(start_x, y, &text, style);

        // Episode counter on the right when it fits.
        if snap.episode_id > 0 {
            let episode = format!("GAME {}", snap.episode_id + 1);
            let ep_w = episode.chars().count() as u16;
            if text.chars().count() as u16 + ep_w + 2 <= grid_w {
                fb.put_str(start_x + grid_w - ep_w, y, &episode, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        value: u32,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
    ) {
        let (bg, fg) = tile_colors(value);
        let style = CellStyle {
            fg,
            bg,
            bold: value != 0,
        };

        let px = start_x + 1 + (col as u16) * self.tile_w;
        let py = start_y + 1 + (row as u16) * self.tile_h;
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        if value != 0 {
            let text = value.to_string();
            let text_w = text.chars().count() as u16;
            let tx = px + self.tile_w.saturating_sub(text_w) / 2;
            let ty = py + self.tile_h / 2;
            fb.put_str(tx, ty, &text, style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        grid_w: u16,
        grid_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(grid_h / 2);
        let text_w = text.chars().count() as u16 + 2;
        let x = start_x.saturating_add(grid_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(60, 58, 50),
            bold: true,
        };
        fb.put_str(x, mid_y, &format!(" {} ", text), style);
    }
}

/// Tile background/foreground colors, the classic 2048 palette.
///
/// Values above 2048 fall back to the dark "super tile" color.
fn tile_colors(value: u32) -> (Rgb, Rgb) {
    let light_text = Rgb::new(119, 110, 101);
    let dark_text = Rgb::new(249, 246, 242);
    match value {
        0 => (Rgb::new(205, 193, 180), light_text),
        2 => (Rgb::new(238, 228, 218), light_text),
        4 => (Rgb::new(237, 224, 200), light_text),
        8 => (Rgb::new(242, 177, 121), dark_text),
        16 => (Rgb::new(245, 149, 99), dark_text),
        32 => (Rgb::new(246, 124, 95), dark_text),
        64 => (Rgb::new(246, 94, 59), dark_text),
        128 => (Rgb::new(237, 207, 114), dark_text),
        256 => (Rgb::new(237, 204, 97), dark_text),
        512 => (Rgb::new(237, 200, 80), dark_text),
        1024 => (Rgb::new(237, 197, 63), dark_text),
        2048 => (Rgb::new(237, 194, 46), dark_text),
        _ => (Rgb::new(60, 58, 50), dark_text),
    }
}
