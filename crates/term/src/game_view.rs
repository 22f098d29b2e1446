//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellCode, GhostColor, SessionStatus};

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

const MAZE_BG: Rgb = Rgb::new(8, 8, 16);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const WALL: CellStyle = CellStyle::new(Rgb::new(40, 60, 220), Rgb::new(40, 60, 220));
const PELLET: CellStyle = CellStyle::new(Rgb::new(250, 190, 170), MAZE_BG);
const AVATAR: CellStyle = CellStyle::new(Rgb::new(255, 225, 0), MAZE_BG).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

const AVATAR_GLYPH: char = '●';
const GHOST_GLYPH: char = '■';
const PELLET_GLYPH: char = '·';
const WALL_GLYPH: char = '█';

/// A lightweight terminal renderer for the maze.
pub struct GameView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a terminal glyph.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers keep one framebuffer across frames; it is only resized when the
    /// viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let maze_px_w = snap.width.saturating_mul(self.cell_w);
        let maze_px_h = snap.height.saturating_mul(self.cell_h);
        let frame_w = maze_px_w.saturating_add(2);
        let frame_h = maze_px_h.saturating_add(2);

        // Leave room on the right for the side panel when it fits.
        let total_w = frame_w.saturating_add(2 + PANEL_WIDTH);
        let start_x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            maze_px_w,
            maze_px_h,
            ' ',
            CellStyle::new(MAZE_BG, MAZE_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x as i16, y as i16) {
                    Some(CellCode::Wall) => {
                        self.fill_cell_rect(fb, start_x, start_y, x, y, WALL_GLYPH, WALL)
                    }
                    Some(CellCode::Pellet) => {
                        self.put_glyph(fb, start_x, start_y, x, y, PELLET_GLYPH, PELLET)
                    }
                    _ => {}
                }
            }
        }

        // Avatar first so a ghost on the same cell stays visible after a loss.
        if let Some((x, y)) = cell_coords(snap.avatar.x, snap.avatar.y, snap) {
            self.put_glyph(fb, start_x, start_y, x, y, AVATAR_GLYPH, AVATAR);
        }
        for ghost in snap.ghosts.iter() {
            if let Some((x, y)) = cell_coords(ghost.position.x, ghost.position.y, snap) {
                let style = CellStyle::new(ghost_rgb(ghost.color), MAZE_BG).bold();
                self.put_glyph(fb, start_x, start_y, x, y, GHOST_GLYPH, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            SessionStatus::Lost => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            SessionStatus::Won => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN")
            }
            SessionStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal column and row of the top-left corner of maze cell `(x, y)`
    /// for a given frame origin.
    pub fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╔', BORDER);
        fb.put_char(x + w - 1, y, '╗', BORDER);
        fb.put_char(x, y + h - 1, '╚', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '╝', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '═', BORDER);
            fb.put_char(x + dx, y + h - 1, '═', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '║', BORDER);
            fb.put_char(x + w - 1, y + dy, '║', BORDER);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// One glyph in the middle column of the cell, background elsewhere.
    fn put_glyph(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(
            px,
            py,
            self.cell_w,
            self.cell_h,
            ' ',
            CellStyle::new(MAZE_BG, MAZE_BG),
        );
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_WIDTH {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PELLETS", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.pellets_remaining, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", LABEL);
        y = y.saturating_add(1);
        let status = match snap.status {
            SessionStatus::Running => "RUNNING",
            SessionStatus::Lost => "CAUGHT",
            SessionStatus::Won => "CLEARED",
        };
        fb.put_str(panel_x, y, status, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GHOSTS", LABEL);
        y = y.saturating_add(1);
        for (i, ghost) in snap.ghosts.iter().enumerate() {
            let style = CellStyle::new(ghost_rgb(ghost.color), PANEL_BG);
            fb.put_char(panel_x + (i as u16) * 2, y, GHOST_GLYPH, style);
        }
        y = y.saturating_add(2);

        let help = CellStyle { dim: true, ..VALUE };
        for line in ["arrows/wasd move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        centered(fb, start_x, frame_w, mid_y, text, OVERLAY);
        centered(
            fb,
            start_x,
            frame_w,
            mid_y.saturating_add(1),
            "press R to restart",
            VALUE,
        );
    }
}

/// Width the side panel needs to be drawn at all.
const PANEL_WIDTH: u16 = 16;

fn centered(fb: &mut FrameBuffer, start_x: u16, frame_w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

fn cell_coords(x: i16, y: i16, snap: &GameSnapshot) -> Option<(u16, u16)> {
    let (x, y) = (u16::try_from(x).ok()?, u16::try_from(y).ok()?);
    (x < snap.width && y < snap.height).then_some((x, y))
}

pub fn ghost_rgb(color: GhostColor) -> Rgb {
    match color {
        GhostColor::Red => Rgb::new(255, 0, 0),
        GhostColor::Pink => Rgb::new(255, 184, 255),
        GhostColor::Cyan => Rgb::new(0, 255, 255),
        GhostColor::Orange => Rgb::new(255, 184, 82),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameState::with_seed(3).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn empty_snapshot_renders_blank_frame() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(30, 10));
        assert!(fb.cells().iter().all(|c| c.ch != AVATAR_GLYPH));
    }

    #[test]
    fn cell_origin_scales_by_cell_size() {
        let view = GameView::new(3, 2);
        assert_eq!(view.cell_origin(4, 1, 0, 0), (5, 2));
        assert_eq!(view.cell_origin(4, 1, 2, 3), (11, 8));
    }
}
