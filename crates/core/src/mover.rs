//! Mover - pure geometric transforms on pieces
//!
//! Every function takes a piece and returns a new one. Nothing here looks at
//! the board; whether the result is a legal placement is for
//! [`Board::is_valid_move`](crate::board::Board::is_valid_move) to decide.

use crate::piece::{bounds, get_shape, Piece};
use crate::types::ShapeId;

/// Namespace for piece transforms.
pub struct Mover;

impl Mover {
    /// One row down.
    pub fn down(piece: &Piece) -> Piece {
        piece.translated(1, 0)
    }

    /// One column left.
    pub fn left(piece: &Piece) -> Piece {
        piece.translated(0, -1)
    }

    /// One column right.
    pub fn right(piece: &Piece) -> Piece {
        piece.translated(0, 1)
    }

    /// Rotate clockwise by table lookup.
    ///
    /// The piece's box origin (3x3, or 4x4 for I) is recovered from the
    /// current state's offsets, and the next state is placed at that same
    /// origin. Table states do not all touch the box's top-left corner, so
    /// that origin is not the cells' minimum. Four rotations return the
    /// original cells. The square is returned unchanged.
    pub fn rotate_clockwise(piece: &Piece) -> Piece {
        if piece.shape() == ShapeId::O {
            return *piece;
        }

        let current = get_shape(piece.shape(), piece.rotation());
        let (table_min, _) = bounds(&current);
        let (piece_min, _) = bounds(piece.coords());
        let origin = (piece_min.0 - table_min.0, piece_min.1 - table_min.1);

        let next_rotation = piece.rotation() + 1;
        let mut coords = get_shape(piece.shape(), next_rotation);
        for (row, col) in coords.iter_mut() {
            *row += origin.0;
            *col += origin.1;
        }

        Piece::new(coords, piece.shape(), next_rotation)
    }

    /// Rotate clockwise, then kick horizontally back inside `[0, board_width)`.
    ///
    /// The shift is the smallest one that fixes the overflowing side. A piece
    /// wider than the board is aligned to column 0 and still overflows on the
    /// right.
    pub fn rotate_clockwise_with_shift(piece: &Piece, board_width: usize) -> Piece {
        let rotated = Self::rotate_clockwise(piece);
        let (min_col, max_col) = rotated.col_span();
        let width = board_width as i32;

        let shift = if min_col < 0 {
            -min_col
        } else if max_col >= width {
            (width - 1 - max_col).max(-min_col)
        } else {
            0
        };

        if shift == 0 {
            rotated
        } else {
            rotated.translated(0, shift)
        }
    }
}
