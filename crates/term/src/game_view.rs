//! GameView: maps a game snapshot and its tile layer into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb, SCREEN_BG};
use crate::tiles::{TileFx, TileLayer};
use crate::types::{tile_value, Coord, Level};

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Minimum panel width before the side panel is drawn at all
const PANEL_MIN_W: u16 = 14;

const KEY_HELP: [&str; 3] = ["arrows/wasd/hjkl", "r  restart", "q  quit"];

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

/// Draws the board, one boxed tile per cell, plus the score panel.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits six-digit values with one column of padding.
        Self {
            tile_w: 7,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Board width and height in terminal cells, frame included
    pub fn board_extent(&self, size: usize) -> (u16, u16) {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        (
            n.saturating_mul(self.tile_w).saturating_add(2),
            n.saturating_mul(self.tile_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Tiles come from `layer`; the numbers in the side panel come from `snap`.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        layer: &TileLayer,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().blank());

        let (frame_w, frame_h) = self.board_extent(layer.size());
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_MIN_W + 2) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let frame = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', frame);

        for row in 0..layer.size() {
            for col in 0..layer.size() {
                let at = Coord::new(row, col);
                match layer.occupant(at) {
                    Some(tile) => self.draw_tile(fb, start_x, start_y, at, tile.level, tile.fx),
                    None => self.draw_empty(fb, start_x, start_y, at),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, layer: &TileLayer, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, layer, viewport, &mut fb);
        fb
    }

    fn tile_origin(&self, start_x: u16, start_y: u16, at: Coord) -> (u16, u16) {
        let col = u16::try_from(at.col).unwrap_or(u16::MAX);
        let row = u16::try_from(at.row).unwrap_or(u16::MAX);
        (
            start_x + 1 + col.saturating_mul(self.tile_w),
            start_y + 1 + row.saturating_mul(self.tile_h),
        )
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, at: Coord) {
        let (x, y) = self.tile_origin(start_x, start_y, at);
        let style = CellStyle::new(BOARD_BG, EMPTY_BG);
        // Leave a one-cell gutter on the right so neighbours stay distinct.
        fb.fill_rect(x, y, self.tile_w - 1, self.tile_h, ' ', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        at: Coord,
        level: Level,
        fx: TileFx,
    ) {
        let (x, y) = self.tile_origin(start_x, start_y, at);
        let bg = level_color(level);
        let fg = if level <= 2 { DARK_TEXT } else { LIGHT_TEXT };
        let mut style = CellStyle::new(fg, bg);
        if level >= 3 || fx != TileFx::None {
            style = style.bold();
        }

        let w = self.tile_w - 1;
        fb.fill_rect(x, y, w, self.tile_h, ' ', style);
        fb.put_centered(x, w, y + self.tile_h / 2, &tile_value(level).to_string(), style);

        // Corner marks flag fresh tiles for one frame.
        let mark = match fx {
            TileFx::New => Some('+'),
            TileFx::Merged => Some('*'),
            TileFx::None | TileFx::Doomed => None,
        };
        if let Some(ch) = mark {
            fb.put_char(x, y, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(PANEL_MIN_W) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let rows: [(&str, u64); 4] = [
            ("SCORE", snap.score),
            ("BEST", snap.best_score),
            ("MOVES", u64::from(snap.moves)),
            ("TILE", tile_value(snap.highest_level)),
        ];

        let mut y = start_y;
        for (name, n) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &n.to_string(), value);
            y = y.saturating_add(3);
        }

        let help = value.dim();
        for line in KEY_HELP {
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let banner = CellStyle::new(LIGHT_TEXT, SCREEN_BG).bold();
        fb.put_centered(start_x, frame_w, mid_y, " GAME OVER ", banner);
        fb.put_centered(start_x, frame_w, mid_y + 1, " r to restart ", banner);
    }
}

/// Background color for a tile level
pub fn level_color(level: Level) -> Rgb {
    match level {
        0 => EMPTY_BG,
        1 => Rgb::new(238, 228, 218),
        2 => Rgb::new(237, 224, 200),
        3 => Rgb::new(242, 177, 121),
        4 => Rgb::new(245, 149, 99),
        5 => Rgb::new(246, 124, 95),
        6 => Rgb::new(246, 94, 59),
        7 => Rgb::new(237, 207, 114),
        8 => Rgb::new(237, 204, 97),
        9 => Rgb::new(237, 200, 80),
        10 => Rgb::new(237, 197, 63),
        11 => Rgb::new(237, 194, 46),
        _ => Rgb::new(60, 58, 50),
    }
}
