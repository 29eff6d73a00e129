//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Only the visible play area is drawn; the hidden buffer rows above it stay
//! off screen, exactly as the faller does while it is still entering.

use tui_columns_core::{FallerState, GameState};
use tui_columns_types::{Cell, Jewel, BUFFER_ROWS};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// A lightweight terminal view of the board and faller.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board = game.board();
        let board_px_w = (board.cols() as u16) * self.cell_w;
        let board_px_h = (board.visible_rows() as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Settled board cells (visible rows only).
        for vis_row in 0..board.visible_rows() as u16 {
            for col in 0..board.cols() as u16 {
                let raw_row = vis_row as i16 + BUFFER_ROWS as i16;
                match board.get(raw_row, col as i16) {
                    Some(Cell::Jewel(jewel)) => {
                        self.fill_cell_rect(fb, start_x, start_y, col, vis_row, '█', jewel_style(jewel));
                    }
                    Some(Cell::Marked(_)) => {
                        self.fill_cell_rect(fb, start_x, start_y, col, vis_row, '▒', FLASH_STYLE);
                    }
                    _ => {
                        self.fill_cell_rect(fb, start_x, start_y, col, vis_row, '·', EMPTY_STYLE);
                    }
                }
            }
        }

        // Active faller, landed pieces highlighted.
        if let Some(faller) = game.faller() {
            let landed = faller.state() == FallerState::Landed;
            for (i, jewel) in faller.jewels().into_iter().enumerate() {
                let vis_row = faller.row() - i as i16 - BUFFER_ROWS as i16;
                if vis_row < 0 || vis_row >= board.visible_rows() as i16 {
                    continue;
                }
                let mut style = jewel_style(jewel);
                style.bold = true;
                if landed {
                    style.bg = Rgb::new(90, 90, 0);
                }
                self.fill_cell_rect(
                    fb,
                    start_x,
                    start_y,
                    faller.column() as u16 - 1,
                    vis_row as u16,
                    '█',
                    style,
                );
            }
        }

        if game.is_game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
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

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

const EMPTY_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(90, 90, 100),
    bg: Rgb::new(30, 30, 40),
    bold: false,
};

const FLASH_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    bg: Rgb::new(30, 30, 40),
    bold: true,
};

fn jewel_style(jewel: Jewel) -> CellStyle {
    let fg = match jewel {
        Jewel::Red => Rgb::new(255, 0, 0),
        Jewel::Orange => Rgb::new(255, 165, 0),
        Jewel::Yellow => Rgb::new(255, 255, 0),
        Jewel::Green => Rgb::new(0, 255, 0),
        Jewel::Cyan => Rgb::new(0, 255, 255),
        Jewel::Blue => Rgb::new(0, 0, 255),
        Jewel::Purple => Rgb::new(128, 0, 128),
    };
    CellStyle {
        fg,
        bg: Rgb::new(30, 30, 40),
        bold: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_columns_core::{Board, GameState};

    #[test]
    fn settled_jewels_land_inside_the_border() {
        // One red jewel at visible row 2, column 1 (raw row 5).
        let board = Board::from_rows(
            3,
            3,
            &[
                "   ", //
                "   ", //
                "   ", //
                "   ", //
                "   ", //
                " R ",
            ],
        );
        let game = GameState::with_board(board, 1);

        // Viewport sized exactly to the frame, 1x1 cells: no centering offset.
        let view = GameView::new(1, 1);
        let fb = view.render(&game, Viewport::new(5, 5));

        assert_eq!(fb.get(2, 3).unwrap().ch, '█');
        assert_eq!(fb.get(2, 3).unwrap().style.fg, Rgb::new(255, 0, 0));
        // A neighboring empty cell gets the grid dot.
        assert_eq!(fb.get(1, 3).unwrap().ch, '·');
        // Border corners.
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(4, 4).unwrap().ch, '┘');
    }

    #[test]
    fn faller_in_buffer_rows_is_not_drawn() {
        let mut game = GameState::new(3, 3, 1);
        game.spawn_faller(2, &[Jewel::Red, Jewel::Green, Jewel::Blue])
            .unwrap();

        let view = GameView::new(1, 1);
        let fb = view.render(&game, Viewport::new(5, 5));

        // The faller's bottom jewel sits on the last buffer row: invisible.
        for y in 1..4 {
            assert_eq!(fb.get(2, y).unwrap().ch, '·');
        }
    }
}
