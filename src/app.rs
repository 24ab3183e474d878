//! Driver state: one session plus pause, leaderboard and logging.
//!
//! `App` maps [`Command`]s onto session calls and reacts to the session's
//! outcomes. It contains no game rules.

use crate::config::Config;
use crate::core::{GameOver, HighScore, Piece, Step, Tetris};
use crate::event_log::{EventLog, SessionEvent};
use crate::records;
use crate::term::{Overlay, SettledColors};
use crate::types::Command;

pub struct App {
    config: Config,
    game: Tetris,
    /// Colors of landed pieces, for drawing.
    colors: SettledColors,
    high_score: HighScore,
    paused: bool,
    /// Leaderboard rank of the last finished game.
    last_rank: Option<usize>,
    log: EventLog,
    /// Non-fatal problems, reported once the terminal is restored.
    warnings: Vec<String>,
}

impl App {
    pub fn new(config: Config, high_score: HighScore, log: EventLog) -> Self {
        let game = Tetris::new(config.board_width, config.board_height, config.seed_or_clock());
        let colors = SettledColors::new(config.board_width, config.board_height);
        let mut app = Self {
            config,
            game,
            colors,
            high_score,
            paused: false,
            last_rank: None,
            log,
            warnings: Vec::new(),
        };
        app.started();
        app
    }

    pub fn game(&self) -> &Tetris {
        &self.game
    }

    pub fn settled_colors(&self) -> &SettledColors {
        &self.colors
    }

    pub fn high_score(&self) -> &HighScore {
        &self.high_score
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn overlay(&self) -> Overlay {
        if self.game.is_over() {
            Overlay::GameOver
        } else if self.paused {
            Overlay::Paused
        } else {
            Overlay::None
        }
    }

    /// Whether gravity should run.
    pub fn is_running(&self) -> bool {
        !self.paused && !self.game.is_over()
    }

    /// Apply one command. After game over only `Restart` does anything.
    pub fn apply(&mut self, command: Command) {
        if command == Command::Restart {
            self.restart();
            return;
        }
        if self.game.is_over() {
            return;
        }
        if command == Command::Pause {
            self.paused = !self.paused;
            return;
        }
        if self.paused && command.is_gameplay() {
            return;
        }

        let result = match command {
            Command::MoveLeft => self.game.move_left().map(|_| ()),
            Command::MoveRight => self.game.move_right().map(|_| ()),
            Command::Rotate => self.game.rotate().map(|_| ()),
            Command::MoveDown => {
                self.step_down();
                Ok(())
            }
            Command::HardDrop => self.game.drop().map(|_| self.settle()),
            Command::Pause | Command::Restart => Ok(()),
        };
        if let Err(over) = result {
            self.finish(over);
        }
    }

    /// One gravity step.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.step_down();
        }
    }

    fn step_down(&mut self) {
        let falling = *self.game.piece();
        match self.game.move_down() {
            Ok(Step::Moved) => {}
            Ok(Step::Landed { lines_cleared }) => self.landed(&falling, lines_cleared),
            Err(over) => {
                // The piece was baked before the next spawn failed.
                self.colors.land(&falling);
                self.finish(over);
            }
        }
    }

    fn settle(&mut self) {
        let falling = *self.game.piece();
        match self.game.settle_and_prepare_next() {
            Ok(lines_cleared) => self.landed(&falling, lines_cleared),
            Err(over) => {
                self.colors.land(&falling);
                self.finish(over);
            }
        }
    }

    pub fn restart(&mut self) {
        self.game = Tetris::new(
            self.config.board_width,
            self.config.board_height,
            self.game.seed(),
        );
        self.colors.clear();
        self.paused = false;
        self.last_rank = None;
        self.started();
    }

    fn started(&mut self) {
        let event = SessionEvent::Start {
            seed: self.game.seed(),
            width: self.config.board_width,
            height: self.config.board_height,
        };
        self.log_event(&event);
        if self.game.is_over() {
            let over = GameOver {
                score: self.game.score(),
                level: self.game.level(),
            };
            self.finish(over);
        }
    }

    fn landed(&mut self, piece: &Piece, lines_cleared: usize) {
        self.colors.land(piece);
        if lines_cleared > 0 {
            let event = SessionEvent::LinesCleared {
                rows: lines_cleared,
                score: self.game.score(),
                level: self.game.level(),
            };
            self.log_event(&event);
        }
    }

    fn finish(&mut self, over: GameOver) {
        self.paused = false;
        self.last_rank = self.high_score.add(over.score, self.config.player.clone());
        if self.last_rank.is_some() {
            if let Err(e) = records::save(&self.config.records_path, &self.high_score) {
                self.warnings.push(format!("{:#}", e));
            }
        }
        let event = SessionEvent::GameOver {
            score: over.score,
            level: over.level,
            rank: self.last_rank,
        };
        self.log_event(&event);
    }

    fn log_event(&mut self, event: &SessionEvent) {
        if let Err(e) = self.log.record(event) {
            self.warnings.push(format!("session log: {:#}", e));
            self.log = EventLog::disabled();
        }
    }
}
