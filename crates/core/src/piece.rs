//! Pieces module - tetromino geometry and rotation tables
//!
//! Every shape has four pre-enumerated rotation states. A state is a set of
//! `(row, col)` offsets inside the shape's bounding box: 3x3 for J, L, S, T
//! and Z, 4x4 for I, 2x2 for O. Each J/L/S/T/Z state is the clockwise
//! rotation of the previous one inside its box. The I bar alternates between
//! the top row and the left column of its box. The O square repeats one state.

use crate::types::{Coord, PieceColor, ShapeId};

/// Offsets of the four cells of one rotation state
pub type PieceShape = [Coord; 4];

/// Number of rotation states per shape
pub const ROTATIONS: u8 = 4;

const I_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (1, 0), (2, 0), (3, 0)],
];

const O_SHAPES: [PieceShape; 4] = [[(0, 0), (0, 1), (1, 0), (1, 1)]; 4];

const T_SHAPES: [PieceShape; 4] = [
    [(0, 1), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (2, 1)],
];

const S_SHAPES: [PieceShape; 4] = [
    [(0, 1), (0, 2), (1, 0), (1, 1)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 1), (1, 2), (2, 0), (2, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
];

const Z_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 2), (1, 1), (1, 2), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(0, 1), (1, 0), (1, 1), (2, 0)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (0, 2), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 0), (2, 1)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(0, 2), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (2, 0)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
];

/// Get the cell offsets for a shape and rotation index.
///
/// The index wraps modulo 4.
pub fn get_shape(shape: ShapeId, rotation: u8) -> PieceShape {
    let table = match shape {
        ShapeId::I => &I_SHAPES,
        ShapeId::O => &O_SHAPES,
        ShapeId::T => &T_SHAPES,
        ShapeId::S => &S_SHAPES,
        ShapeId::Z => &Z_SHAPES,
        ShapeId::J => &J_SHAPES,
        ShapeId::L => &L_SHAPES,
    };
    table[(rotation % ROTATIONS) as usize]
}

/// A tetromino instance: four absolute cells plus the shape and rotation
/// they were derived from.
///
/// Pieces are values. Moving or rotating produces a new piece (see
/// [`Mover`](crate::mover::Mover)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    coords: [Coord; 4],
    shape: ShapeId,
    rotation: u8,
}

impl Piece {
    /// Build a piece from explicit cells.
    pub fn new(coords: [Coord; 4], shape: ShapeId, rotation: u8) -> Self {
        Self {
            coords,
            shape,
            rotation: rotation % ROTATIONS,
        }
    }

    /// A piece in its table position for `rotation`, box origin at (0, 0).
    pub fn from_table(shape: ShapeId, rotation: u8) -> Self {
        Self::new(get_shape(shape, rotation), shape, rotation)
    }

    pub fn coords(&self) -> &[Coord; 4] {
        &self.coords
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn color(&self) -> PieceColor {
        self.shape.color()
    }

    /// Same shape and rotation, every cell moved by `(d_row, d_col)`.
    pub fn translated(&self, d_row: i32, d_col: i32) -> Self {
        let mut coords = self.coords;
        for (row, col) in coords.iter_mut() {
            *row += d_row;
            *col += d_col;
        }
        Self { coords, ..*self }
    }

    /// Top-left corner of the cells' bounding box.
    pub fn min_corner(&self) -> Coord {
        bounds(&self.coords).0
    }

    /// Inclusive `(min_col, max_col)` of the piece.
    pub fn col_span(&self) -> (i32, i32) {
        let (min, max) = bounds(&self.coords);
        (min.1, max.1)
    }

    /// Inclusive `(min_row, max_row)` of the piece.
    pub fn row_span(&self) -> (i32, i32) {
        let (min, max) = bounds(&self.coords);
        (min.0, max.0)
    }

    /// Bounding box size as `(rows, cols)`.
    pub fn extent(&self) -> (i32, i32) {
        let (min, max) = bounds(&self.coords);
        (max.0 - min.0 + 1, max.1 - min.1 + 1)
    }
}

/// Component-wise min and max of a set of cells.
pub(crate) fn bounds(cells: &[Coord]) -> (Coord, Coord) {
    let mut min = (i32::MAX, i32::MAX);
    let mut max = (i32::MIN, i32::MIN);
    for &(row, col) in cells {
        min.0 = min.0.min(row);
        min.1 = min.1.min(col);
        max.0 = max.0.max(row);
        max.1 = max.1.max(col);
    }
    (min, max)
}
