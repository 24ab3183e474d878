//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is 0 (empty) or 1
//! (settled block). Cells are stored in a flat row-major vector.
//! Coordinates: (row, col) where row ranges 0..height (top to bottom) and col
//! ranges 0..width (left to right).
//!
//! The falling piece never lives in the grid. It is overlaid by [`Board::render`]
//! for display and baked in by [`Board::commit`] when it lands.

use crate::piece::Piece;
use crate::types::Coord;

/// Row-major snapshot of the grid, one `Vec<u8>` per row.
pub type Grid = Vec<Vec<u8>>;

/// The settled playing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<u8>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Build a board from rows. Any non-zero value counts as occupied.
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "all rows must have the same width"
        );

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&cell| u8::from(cell != 0)))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<u8> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if (row, col) is inside the board and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(0))
    }

    /// Check whether every cell of `piece` is in bounds and empty.
    pub fn is_valid_move(&self, piece: &Piece) -> bool {
        piece
            .coords()
            .iter()
            .all(|&(row, col)| self.is_free(row, col))
    }

    /// Copy of the grid with `piece` drawn in. The board is not modified.
    ///
    /// Cells of the piece that fall outside the board are skipped.
    pub fn render(&self, piece: &Piece) -> Grid {
        let mut grid = self.to_rows();
        for &(row, col) in piece.coords() {
            if self.index(row, col).is_some() {
                grid[row as usize][col as usize] = 1;
            }
        }
        grid
    }

    /// Bake `piece` into the grid.
    ///
    /// All-or-nothing: returns false and leaves the grid untouched if any
    /// cell is out of bounds or already occupied.
    pub fn commit(&mut self, piece: &Piece) -> bool {
        if !self.is_valid_move(piece) {
            return false;
        }
        for &(row, col) in piece.coords() {
            if let Some(idx) = self.index(row, col) {
                self.cells[idx] = 1;
            }
        }
        true
    }

    fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height && self.row(row).iter().all(|&cell| cell == 1)
    }

    /// Indices of full rows, ascending.
    pub fn detect_full_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Zero one row in place. Other rows do not move.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.height {
            return;
        }
        let start = row * self.width;
        self.cells[start..start + self.width].fill(0);
    }

    /// Clear all full rows and compact the rest downward.
    ///
    /// Returns the number of rows removed. Non-full rows keep their content
    /// and relative order; the vacated rows at the top are empty.
    pub fn clear_full_lines(&mut self) -> usize {
        let full = self.detect_full_rows();
        if full.is_empty() {
            return 0;
        }
        for &row in &full {
            self.clear_row(row);
        }

        // Two-pointer pass from the bottom: every surviving row is copied to
        // the next free write slot.
        let width = self.width;
        let mut write = self.height;
        for read in (0..self.height).rev() {
            if full.binary_search(&read).is_ok() {
                continue;
            }
            write -= 1;
            if write != read {
                let src = read * width;
                self.cells.copy_within(src..src + width, write * width);
            }
        }
        self.cells[..write * width].fill(0);

        full.len()
    }

    /// First row (scanning top-down) with an occupied cell in the inclusive
    /// column range `[col_start, col_end]`. Columns past the board edge are
    /// ignored.
    pub fn first_filled_row_in_range(&self, col_start: usize, col_end: usize) -> Option<usize> {
        if col_start > col_end || col_start >= self.width {
            return None;
        }
        let end = col_end.min(self.width - 1);
        (0..self.height).find(|&row| self.row(row)[col_start..=end].contains(&1))
    }

    /// The piece moved so it is horizontally centered on its bounding box
    /// (`(width - piece_width) / 2`, rounded down) with its top row at row 0.
    pub fn shift_to_center(&self, piece: &Piece) -> Piece {
        let (min_row, min_col) = piece.min_corner();
        let (_, piece_width) = piece.extent();
        let target_col = (self.width as i32 - piece_width).max(0) / 2;
        piece.translated(-min_row, target_col - min_col)
    }

    /// Number of occupied cells.
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Copy of the grid as rows.
    pub fn to_rows(&self) -> Grid {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// Cells of the grid that are occupied, as coordinates.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(move |(idx, _)| ((idx / self.width) as i32, (idx % self.width) as i32))
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeId;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(0, -1), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = vec![vec![0, 1, 0], vec![1, 1, 1]];
        let board = Board::from_rows(&rows);
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    fn test_commit_is_all_or_nothing() {
        let mut board = Board::new(4, 5);
        board.cells[4 + 3] = 1;
        let piece = Piece::new([(0, 2), (0, 3), (1, 2), (1, 3)], ShapeId::O, 0);
        assert!(!board.commit(&piece));
        assert_eq!(board.filled_cells(), 1);

        let piece = Piece::new([(3, 0), (3, 1), (4, 0), (4, 1)], ShapeId::O, 0);
        assert!(board.commit(&piece));
        assert_eq!(board.filled_cells(), 5);
    }

    #[test]
    fn test_occupied_coordinates() {
        let board = Board::from_rows(&[vec![0, 0, 1], vec![1, 0, 0]]);
        let cells: Vec<Coord> = board.occupied().collect();
        assert_eq!(cells, vec![(0, 2), (1, 0)]);
    }

    #[test]
    fn test_first_filled_row_clamps_range() {
        let board = Board::from_rows(&[vec![0, 0, 0], vec![0, 0, 1]]);
        assert_eq!(board.first_filled_row_in_range(2, 99), Some(1));
        assert_eq!(board.first_filled_row_in_range(0, 1), None);
        assert_eq!(board.first_filled_row_in_range(2, 1), None);
    }
}
