//! Colors of settled cells.
//!
//! The board only knows occupied or empty. To draw landed pieces in their
//! own color the driver stamps each piece here as it lands and then drops
//! full rows exactly as the board does.

use crate::core::Piece;
use crate::types::PieceColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledColors {
    width: usize,
    height: usize,
    cells: Vec<Option<PieceColor>>,
}

impl SettledColors {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn get(&self, row: i32, col: i32) -> Option<PieceColor> {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Record a landed piece, then remove rows it completed.
    ///
    /// Returns the number of rows removed; it matches what the board cleared
    /// for the same landing.
    pub fn land(&mut self, piece: &Piece) -> usize {
        let color = piece.color();
        for &(row, col) in piece.coords() {
            if let Some(idx) = self.index(row, col) {
                self.cells[idx] = Some(color);
            }
        }
        self.clear_full_rows()
    }

    fn is_row_full(&self, row: usize) -> bool {
        let start = row * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(Option::is_some)
    }

    fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut write = self.height;
        let mut cleared = 0;
        for read in (0..self.height).rev() {
            if self.is_row_full(read) {
                cleared += 1;
                continue;
            }
            write -= 1;
            if write != read {
                let src = read * width;
                self.cells.copy_within(src..src + width, write * width);
            }
        }
        self.cells[..write * width].fill(None);
        cleared
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, PieceFactory};
    use crate::types::ShapeId;

    fn square_at(row: i32, col: i32) -> Piece {
        PieceFactory::create(ShapeId::O).translated(row, col)
    }

    #[test]
    fn test_landed_piece_keeps_its_color() {
        let mut colors = SettledColors::new(4, 4);
        assert_eq!(colors.land(&square_at(2, 0)), 0);
        assert_eq!(colors.get(3, 1), Some(PieceColor::Yellow));
        assert_eq!(colors.get(3, 2), None);
        assert_eq!(colors.get(-1, 0), None);
    }

    #[test]
    fn test_rows_follow_board_compaction() {
        let mut board = Board::new(4, 4);
        let mut colors = SettledColors::new(4, 4);

        let t = PieceFactory::create(ShapeId::T).translated(2, 0);
        assert!(board.commit(&t));
        colors.land(&t);

        // A vertical bar on the right completes the bottom row.
        let bar = Piece::from_table(ShapeId::I, 1).translated(0, 3);
        assert!(board.commit(&bar));
        let board_cleared = board.clear_full_lines();
        assert_eq!(colors.land(&bar), board_cleared);
        assert_eq!(board_cleared, 1);

        // Occupancy agrees cell by cell after the clear.
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(
                    board.get(row, col) == Some(1),
                    colors.get(row, col).is_some(),
                    "cell ({}, {})",
                    row,
                    col
                );
            }
        }
        assert_eq!(colors.get(3, 1), Some(PieceColor::Purple));
        assert_eq!(colors.get(3, 3), Some(PieceColor::Cyan));
        assert_eq!(colors.get(0, 3), None);
    }
}
