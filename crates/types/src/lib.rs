//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data shared by the engine, the input mapping,
//! and the terminal view. Everything here is dependency-free.
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, col)`:
//!
//! - **row** grows downward, row 0 is the top of the board
//! - **col** grows rightward, col 0 is the left wall
//!
//! Coordinates are signed so that a piece moved past a wall can still be
//! represented (and then rejected by the board).
//!
//! # Gravity by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 600ms |
//! | 2 | 550ms |
//! | 3 | 500ms |
//! | ... | -50ms per level |
//! | 10+ | 150ms (floor) |
//!
//! # Examples
//!
//! ```
//! use tetris_rules_types::{Command, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let shape = ShapeId::from_str("t").unwrap();
//! assert_eq!(shape, ShapeId::T);
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// A board cell address: `(row, col)`.
pub type Coord = (i32, i32);

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Smallest board dimension the driver accepts
pub const MIN_BOARD_DIM: usize = 4;

/// Largest board dimension the driver accepts
pub const MAX_BOARD_DIM: usize = 200;

/// Gravity interval by level (milliseconds per row).
///
/// Index 0 = level 1. Levels past the end of the table use the last entry.
pub const SPEED_TABLE_MS: [u32; 10] = [600, 550, 500, 450, 400, 350, 300, 250, 200, 150];

/// Gravity floor in milliseconds
pub const MIN_SPEED_MS: u32 = 150;

/// Number of cleared rows needed to advance one level
pub const CLEARS_PER_LEVEL: u32 = 10;

/// Base points for clearing N rows in one batch at level 1.
///
/// Index is the row count; batches of more than 4 rows use the last entry.
pub const LINE_SCORES: [u32; 5] = [0, 10, 30, 50, 100];

/// Maximum number of entries kept in the leaderboard
pub const HIGH_SCORE_CAPACITY: usize = 5;

/// Side of the square box used for the next-piece preview
pub const PREVIEW_SIZE: usize = 4;

/// The seven tetromino shapes
///
/// Each shape has a distinct display color:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeId {
    /// All shapes in catalog order.
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::O,
        ShapeId::T,
        ShapeId::S,
        ShapeId::Z,
        ShapeId::J,
        ShapeId::L,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("i"), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_str("O"), Some(ShapeId::O));
    /// assert_eq!(ShapeId::from_str("square"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeId::I),
            "o" => Some(ShapeId::O),
            "t" => Some(ShapeId::T),
            "s" => Some(ShapeId::S),
            "z" => Some(ShapeId::Z),
            "j" => Some(ShapeId::J),
            "l" => Some(ShapeId::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::I => "i",
            ShapeId::O => "o",
            ShapeId::T => "t",
            ShapeId::S => "s",
            ShapeId::Z => "z",
            ShapeId::J => "j",
            ShapeId::L => "l",
        }
    }

    /// Display color of the shape.
    pub fn color(&self) -> PieceColor {
        match self {
            ShapeId::I => PieceColor::Cyan,
            ShapeId::O => PieceColor::Yellow,
            ShapeId::T => PieceColor::Purple,
            ShapeId::S => PieceColor::Green,
            ShapeId::Z => PieceColor::Red,
            ShapeId::J => PieceColor::Blue,
            ShapeId::L => PieceColor::Orange,
        }
    }
}

/// Named piece colors; renderers map them to concrete RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl PieceColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Yellow => "yellow",
            PieceColor::Purple => "purple",
            PieceColor::Green => "green",
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
        }
    }
}

/// Driver commands
///
/// Each command maps to one engine entry point (or to a driver-level
/// action such as pausing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, landing it if blocked
    MoveDown,
    /// Drop to the lowest valid row and settle immediately
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a new session
    Restart,
}

impl Command {
    /// Parse command from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "harddrop" => Some(Command::HardDrop),
            "rotate" => Some(Command::Rotate),
            "pause" => Some(Command::Pause),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::HardDrop => "hardDrop",
            Command::Rotate => "rotate",
            Command::Pause => "pause",
            Command::Restart => "restart",
        }
    }

    /// Whether the command acts on the falling piece (and is therefore
    /// ignored while paused or after game over).
    pub fn is_gameplay(&self) -> bool {
        !matches!(self, Command::Pause | Command::Restart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_table_is_descending_and_ends_at_floor() {
        assert!(SPEED_TABLE_MS.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(SPEED_TABLE_MS[0], 600);
        assert_eq!(*SPEED_TABLE_MS.last().unwrap(), MIN_SPEED_MS);
    }

    #[test]
    fn line_scores_match_classic_table() {
        assert_eq!(LINE_SCORES[1], 10);
        assert_eq!(LINE_SCORES[2], 30);
        assert_eq!(LINE_SCORES[3], 50);
    }

    #[test]
    fn shape_names_round_trip() {
        for shape in ShapeId::ALL {
            assert_eq!(ShapeId::from_str(shape.as_str()), Some(shape));
        }
    }

    #[test]
    fn command_names_round_trip() {
        for command in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::MoveDown,
            Command::HardDrop,
            Command::Rotate,
            Command::Pause,
            Command::Restart,
        ] {
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
        assert!(Command::HardDrop.is_gameplay());
        assert!(!Command::Pause.is_gameplay());
    }
}
