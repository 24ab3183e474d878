//! Game session - ties together board, pieces, mover and scoring
//!
//! A session is either active (a piece is falling) or over. Invalid moves
//! are not errors: they leave the session unchanged and report `Ok(false)`.
//! The only failure is [`GameOver`], returned when a freshly spawned piece
//! does not fit and by every mutating call made after that.

use std::fmt;

use crate::board::{Board, Grid};
use crate::factory::PieceFactory;
use crate::mover::Mover;
use crate::piece::Piece;
use crate::scoring::{calculate_level, calculate_line_score, get_speed_ms};
use crate::types::PREVIEW_SIZE;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Over,
}

/// Result of one downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece moved one row down.
    Moved,
    /// The piece could not move, was settled, and the next piece spawned.
    Landed { lines_cleared: usize },
}

/// Terminal outcome of a session: no room for the next piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
    pub level: u32,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game over (score {}, level {})", self.score, self.level)
    }
}

impl std::error::Error for GameOver {}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Tetris {
    board: Board,
    piece: Piece,
    next_piece: Piece,
    factory: PieceFactory,
    score: u32,
    level: u32,
    speed_ms: u32,
    /// Lifetime number of cleared rows.
    times_lines_were_cleared: u32,
    state: SessionState,
}

impl Tetris {
    /// Start a session on an empty `width x height` board.
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        Self::with_board(Board::new(width, height), seed)
    }

    /// Start a session on an existing board.
    ///
    /// The first piece is spawned immediately. If it does not fit, the
    /// session starts over.
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut factory = PieceFactory::new(seed);
        let piece = board.shift_to_center(&factory.random_next());
        let next_piece = factory.random_next();
        let state = if board.is_valid_move(&piece) {
            SessionState::Active
        } else {
            SessionState::Over
        };

        let level = calculate_level(0);
        Self {
            board,
            piece,
            next_piece,
            factory,
            score: 0,
            level,
            speed_ms: get_speed_ms(level),
            times_lines_were_cleared: 0,
            state,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next_piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Gravity interval the driver should tick at.
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn times_lines_were_cleared(&self) -> u32 {
        self.times_lines_were_cleared
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::Over
    }

    /// Current piece generator state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.factory.seed()
    }

    fn game_over(&self) -> GameOver {
        GameOver {
            score: self.score,
            level: self.level,
        }
    }

    fn ensure_active(&self) -> Result<(), GameOver> {
        match self.state {
            SessionState::Active => Ok(()),
            SessionState::Over => Err(self.game_over()),
        }
    }

    /// Replace the falling piece with `candidate` if it fits.
    fn try_replace(&mut self, candidate: Piece) -> Result<bool, GameOver> {
        self.ensure_active()?;
        if self.board.is_valid_move(&candidate) {
            self.piece = candidate;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn move_left(&mut self) -> Result<bool, GameOver> {
        self.try_replace(Mover::left(&self.piece))
    }

    pub fn move_right(&mut self) -> Result<bool, GameOver> {
        self.try_replace(Mover::right(&self.piece))
    }

    /// Rotate clockwise with the horizontal wall kick.
    pub fn rotate(&mut self) -> Result<bool, GameOver> {
        let candidate = Mover::rotate_clockwise_with_shift(&self.piece, self.board.width());
        self.try_replace(candidate)
    }

    /// One gravity step: move down, or settle the piece if it cannot move.
    pub fn move_down(&mut self) -> Result<Step, GameOver> {
        if self.try_replace(Mover::down(&self.piece))? {
            return Ok(Step::Moved);
        }
        let lines_cleared = self.settle_and_prepare_next()?;
        Ok(Step::Landed { lines_cleared })
    }

    /// Hard drop: move the piece to its lowest valid row without settling it.
    ///
    /// Returns the number of rows travelled.
    pub fn drop(&mut self) -> Result<u32, GameOver> {
        self.ensure_active()?;
        let mut rows = 0;
        loop {
            let candidate = Mover::down(&self.piece);
            if !self.board.is_valid_move(&candidate) {
                break;
            }
            self.piece = candidate;
            rows += 1;
        }
        Ok(rows)
    }

    /// Bake the falling piece, clear lines, score, and spawn the next piece.
    ///
    /// Returns the number of rows cleared, or [`GameOver`] when the new piece
    /// has no room.
    pub fn settle_and_prepare_next(&mut self) -> Result<usize, GameOver> {
        self.ensure_active()?;

        let committed = self.board.commit(&self.piece);
        debug_assert!(committed, "falling piece overlaps the board");
        let (lines_cleared, _) = self.clear_lines_and_score();

        self.piece = self.board.shift_to_center(&self.next_piece);
        self.next_piece = self.factory.random_next();

        if !self.board.is_valid_move(&self.piece) {
            self.state = SessionState::Over;
            return Err(self.game_over());
        }
        Ok(lines_cleared)
    }

    /// Clear full rows on the board and add their score.
    ///
    /// Returns the points added (0 when nothing was full).
    pub fn calculate_score(&mut self) -> u32 {
        self.clear_lines_and_score().1
    }

    fn clear_lines_and_score(&mut self) -> (usize, u32) {
        let rows = self.board.clear_full_lines();
        if rows == 0 {
            return (0, 0);
        }

        // Scored at the level the batch was cleared on.
        let points = calculate_line_score(rows, self.level);
        self.score = self.score.saturating_add(points);
        self.times_lines_were_cleared += rows as u32;
        self.set_speed();
        (rows, points)
    }

    /// Recompute level and gravity from the cleared-row count.
    pub fn set_speed(&mut self) {
        self.level = calculate_level(self.times_lines_were_cleared);
        self.speed_ms = get_speed_ms(self.level);
    }

    /// Replace the falling piece, if the session is active and the piece fits.
    pub fn place_piece(&mut self, piece: Piece) -> bool {
        matches!(self.try_replace(piece), Ok(true))
    }

    /// Board snapshot with the falling piece drawn in.
    pub fn render(&self) -> Grid {
        self.board.render(&self.piece)
    }

    /// The next piece normalized into the preview box.
    pub fn next_preview(&self) -> [[u8; PREVIEW_SIZE]; PREVIEW_SIZE] {
        let mut grid = [[0u8; PREVIEW_SIZE]; PREVIEW_SIZE];
        let (min_row, min_col) = self.next_piece.min_corner();
        for &(row, col) in self.next_piece.coords() {
            let (r, c) = ((row - min_row) as usize, (col - min_col) as usize);
            if r < PREVIEW_SIZE && c < PREVIEW_SIZE {
                grid[r][c] = 1;
            }
        }
        grid
    }
}
