//! SessionView: maps a [`Tetris`] session and leaderboard into a [`Frame`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::colors::SettledColors;
use crate::core::{HighScore, Tetris};
use crate::frame::{Frame, Glyph, Rgb};
use crate::types::{PieceColor, PREVIEW_SIZE};

const BORDER: Rgb = Rgb::new(200, 200, 200);
const LABEL: Rgb = Rgb::new(150, 150, 160);
const TEXT: Rgb = Rgb::new(235, 235, 235);
const PLAYFIELD: Rgb = Rgb::new(30, 30, 40);
const SETTLED: Rgb = Rgb::new(120, 120, 130);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Side panel width in terminal columns.
const PANEL_W: u16 = 22;

/// Text drawn over the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Paused,
    GameOver,
}

impl Overlay {
    fn text(self) -> Option<&'static str> {
        match self {
            Overlay::None => None,
            Overlay::Paused => Some("PAUSED"),
            Overlay::GameOver => Some("GAME OVER"),
        }
    }
}

/// Terminal color for a piece color.
pub fn piece_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(0, 240, 240),
        PieceColor::Yellow => Rgb::new(240, 240, 0),
        PieceColor::Purple => Rgb::new(160, 0, 240),
        PieceColor::Green => Rgb::new(0, 240, 0),
        PieceColor::Red => Rgb::new(240, 0, 0),
        PieceColor::Blue => Rgb::new(0, 0, 240),
        PieceColor::Orange => Rgb::new(240, 160, 0),
    }
}

pub struct SessionView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for SessionView {
    fn default() -> Self {
        // 2 columns per cell compensates for typical glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl SessionView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Bordered playfield size in terminal cells. Saturates at `u16::MAX`.
    fn board_frame(&self, board_width: usize, board_height: usize) -> (u16, u16) {
        let to_u16 = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
        let frame_w = to_u16(board_width)
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let frame_h = to_u16(board_height).saturating_add(2);
        (frame_w, frame_h)
    }

    /// Size of the frame [`render`](Self::render) produces for a board.
    pub fn frame_size(&self, board_width: usize, board_height: usize) -> (u16, u16) {
        let (frame_w, frame_h) = self.board_frame(board_width, board_height);
        // Panel: stats, preview and leaderboard stacked.
        let panel_h = 10 + PREVIEW_SIZE as u16 + 2 + HIGH_SCORE_ROWS;
        (
            frame_w.saturating_add(2 + PANEL_W),
            frame_h.max(panel_h),
        )
    }

    /// Render with every settled cell in one neutral color.
    pub fn render(&self, game: &Tetris, records: &HighScore, overlay: Overlay) -> Frame {
        self.render_with_colors(game, None, records, overlay)
    }

    /// Render, drawing settled cells in the color recorded in `colors`.
    /// Cells with no recorded color fall back to the neutral one.
    pub fn render_with_colors(
        &self,
        game: &Tetris,
        colors: Option<&SettledColors>,
        records: &HighScore,
        overlay: Overlay,
    ) -> Frame {
        let board = game.board();
        let (width, height) = self.frame_size(board.width(), board.height());
        let mut frame = Frame::new(width, height);

        let (frame_w, frame_h) = self.board_frame(board.width(), board.height());
        draw_border(&mut frame, 0, 0, frame_w, frame_h);

        // Settled cells, then the falling piece in its own color.
        for (row, cells) in board.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let (row, col) = (row as i32, col as i32);
                let fg = if cell == 0 {
                    PLAYFIELD
                } else {
                    colors
                        .and_then(|c| c.get(row, col))
                        .map_or(SETTLED, piece_rgb)
                };
                self.put_cell(&mut frame, 1, 1, row, col, cell != 0, fg);
            }
        }
        let piece_fg = piece_rgb(game.piece().color());
        for &(row, col) in game.piece().coords() {
            if board.get(row, col).is_some() {
                self.put_cell(&mut frame, 1, 1, row, col, true, piece_fg);
            }
        }

        let px = frame_w.saturating_add(2);
        let mut y = 0;
        for (label, value) in [
            ("SCORE", game.score().to_string()),
            ("LEVEL", game.level().to_string()),
            ("SPEED", format!("{}ms", game.speed_ms())),
        ] {
            frame.put_str(px, y, label, LABEL);
            frame.put_str(px, y + 1, &value, TEXT);
            y += 3;
        }

        frame.put_str(px, y, "NEXT", LABEL);
        y += 1;
        let next_fg = piece_rgb(game.next_piece().color());
        for (row, cells) in game.next_preview().iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                self.put_cell(
                    &mut frame,
                    px,
                    y,
                    row as i32,
                    col as i32,
                    cell != 0,
                    if cell != 0 { next_fg } else { BLACK },
                );
            }
        }
        y += PREVIEW_SIZE as u16 + 1;

        if overlay != Overlay::None {
            draw_high_scores(&mut frame, px, y, records);
        }

        if let Some(text) = overlay.text() {
            let tx = frame_w.saturating_sub(text.len() as u16) / 2;
            let ty = frame_h / 2;
            frame.put_str(tx, ty, text, TEXT);
        }

        frame
    }

    #[allow(clippy::too_many_arguments)]
    fn put_cell(
        &self,
        frame: &mut Frame,
        origin_x: u16,
        origin_y: u16,
        row: i32,
        col: i32,
        filled: bool,
        fg: Rgb,
    ) {
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            return;
        };
        let ch = if filled { '█' } else { ' ' };
        let bg = if filled { BLACK } else { fg };
        let x = origin_x.saturating_add(col.saturating_mul(self.cell_w));
        let y = origin_y.saturating_add(row);
        for dx in 0..self.cell_w {
            frame.put(x.saturating_add(dx), y, Glyph::new(ch, fg, bg));
        }
    }
}

const HIGH_SCORE_ROWS: u16 = 1 + crate::types::HIGH_SCORE_CAPACITY as u16;

fn draw_high_scores(frame: &mut Frame, x: u16, y: u16, records: &HighScore) {
    frame.put_str(x, y, "HIGH SCORES", LABEL);
    if records.is_empty() {
        frame.put_str(x, y + 1, "-", TEXT);
        return;
    }
    for (rank, record) in records.records().iter().enumerate() {
        let name: String = record.description.chars().take(12).collect();
        let line = format!("{}. {:<12} {}", rank + 1, name, record.score);
        frame.put_str(x, y + 1 + rank as u16, &line, TEXT);
    }
}

fn draw_border(frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let glyph = |ch| Glyph::new(ch, BORDER, BLACK);
    let (right, bottom) = (x + w - 1, y + h - 1);
    for cx in x + 1..right {
        frame.put(cx, y, glyph('─'));
        frame.put(cx, bottom, glyph('─'));
    }
    for cy in y + 1..bottom {
        frame.put(x, cy, glyph('│'));
        frame.put(right, cy, glyph('│'));
    }
    frame.put(x, y, glyph('┌'));
    frame.put(right, y, glyph('┐'));
    frame.put(x, bottom, glyph('└'));
    frame.put(right, bottom, glyph('┘'));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;

    fn game() -> Tetris {
        Tetris::new(10, 20, 12345)
    }

    #[test]
    fn test_frame_size_fits_board_and_panel() {
        let view = SessionView::default();
        let (w, h) = view.frame_size(10, 20);
        assert_eq!(w, 22 + 2 + PANEL_W);
        assert_eq!(h, 22);
    }

    #[test]
    fn test_frame_size_saturates_for_huge_boards() {
        let view = SessionView::default();
        let (w, h) = view.frame_size(40_000, 20);
        assert_eq!(w, u16::MAX);
        assert_eq!(h, 22);
        let (w, h) = view.frame_size(usize::MAX, usize::MAX);
        assert_eq!((w, h), (u16::MAX, u16::MAX));
    }

    #[test]
    fn test_border_corners() {
        let frame = SessionView::default().render(&game(), &HighScore::default(), Overlay::None);
        assert_eq!(frame.get(0, 0).unwrap().ch, '┌');
        assert_eq!(frame.get(21, 0).unwrap().ch, '┐');
        assert_eq!(frame.get(0, 21).unwrap().ch, '└');
        assert_eq!(frame.get(21, 21).unwrap().ch, '┘');
    }

    #[test]
    fn test_falling_piece_uses_shape_color() {
        let game = game();
        let frame = SessionView::default().render(&game, &HighScore::default(), Overlay::None);
        let expected = piece_rgb(game.piece().color());
        for &(row, col) in game.piece().coords() {
            let glyph = frame.get(1 + col as u16 * 2, 1 + row as u16).unwrap();
            assert_eq!(glyph.ch, '█');
            assert_eq!(glyph.fg, expected);
        }
    }

    #[test]
    fn test_settled_cells_use_recorded_colors() {
        let mut game = game();
        game.drop().unwrap();
        let landed = *game.piece();
        game.settle_and_prepare_next().unwrap();

        let mut colors = SettledColors::new(10, 20);
        colors.land(&landed);

        let view = SessionView::default();
        let plain = view.render(&game, &HighScore::default(), Overlay::None);
        let colored =
            view.render_with_colors(&game, Some(&colors), &HighScore::default(), Overlay::None);
        for &(row, col) in landed.coords() {
            let (x, y) = (1 + col as u16 * 2, 1 + row as u16);
            assert_eq!(plain.get(x, y).unwrap().fg, SETTLED);
            assert_eq!(colored.get(x, y).unwrap().fg, piece_rgb(landed.color()));
        }
    }

    #[test]
    fn test_panel_shows_stats() {
        let frame = SessionView::default().render(&game(), &HighScore::default(), Overlay::None);
        let text = frame.lines().join("\n");
        assert!(text.contains("SCORE"));
        assert!(text.contains("LEVEL"));
        assert!(text.contains("600ms"));
        assert!(text.contains("NEXT"));
        assert!(!text.contains("HIGH SCORES"));
    }

    #[test]
    fn test_game_over_overlay_lists_records() {
        let records = HighScore::new([Record::new("ann", 120), Record::new("bob", 40)]);
        let frame = SessionView::default().render(&game(), &records, Overlay::GameOver);
        let text = frame.lines().join("\n");
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("HIGH SCORES"));
        assert!(text.contains("1. ann"));
        assert!(text.contains("2. bob"));
    }

    #[test]
    fn test_pause_overlay() {
        let frame = SessionView::default().render(&game(), &HighScore::default(), Overlay::Paused);
        assert!(frame.lines().iter().any(|l| l.contains("PAUSED")));
    }
}
