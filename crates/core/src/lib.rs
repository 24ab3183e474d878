//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every game rule. It has **no dependencies** on terminal
//! I/O, input handling, or storage:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Synchronous**: every call runs to completion, nothing blocks
//! - **Portable**: drivers own the timer, the screen and the records file
//!
//! # Module Structure
//!
//! - [`piece`]: tetromino cells and the static rotation tables
//! - [`factory`]: shape catalog and uniform random next piece
//! - [`mover`]: translate / rotate transforms with the horizontal wall kick
//! - [`board`]: grid, collision check, line detection and compaction
//! - [`scoring`]: line-clear points, level and gravity speed
//! - [`tetris`]: the game session and its game-over outcome
//! - [`high_score`]: bounded leaderboard
//! - [`rng`]: seeded LCG
//!
//! # Example
//!
//! ```
//! use tetris_rules_core::{Step, Tetris};
//!
//! let mut game = Tetris::new(10, 20, 12345);
//! game.move_left().unwrap();
//! game.rotate().unwrap();
//!
//! // Hard drop, then settle the piece.
//! game.drop().unwrap();
//! let cleared = game.settle_and_prepare_next().unwrap();
//! assert_eq!(cleared, 0);
//! assert_eq!(game.board().filled_cells(), 4);
//!
//! // Gravity is the driver calling move_down every `speed_ms()`.
//! assert_eq!(game.move_down(), Ok(Step::Moved));
//! ```

pub mod board;
pub mod factory;
pub mod high_score;
pub mod mover;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod tetris;

pub use tetris_rules_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Grid};
pub use factory::PieceFactory;
pub use high_score::{HighScore, Record};
pub use mover::Mover;
pub use piece::{get_shape, Piece, PieceShape};
pub use rng::SimpleRng;
pub use tetris::{GameOver, SessionState, Step, Tetris};
