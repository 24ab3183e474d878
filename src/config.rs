//! Driver configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM};

pub const DEFAULT_RECORDS_PATH: &str = "tetris-records.json";
pub const DEFAULT_PLAYER: &str = "player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub board_width: usize,
    pub board_height: usize,
    pub records_path: PathBuf,
    /// Description stored with new leaderboard records.
    pub player: String,
    /// Fixed piece seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            records_path: PathBuf::from(DEFAULT_RECORDS_PATH),
            player: DEFAULT_PLAYER.to_string(),
            seed: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from `TETRIS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Unset, blank or unparsable values
    /// fall back to the defaults; board sides are clamped to
    /// [`MIN_BOARD_DIM`]`..=`[`MAX_BOARD_DIM`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let dim = |key: &str, default: usize| {
            value(key)
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(default)
                .clamp(MIN_BOARD_DIM, MAX_BOARD_DIM)
        };

        Self {
            board_width: dim("TETRIS_BOARD_WIDTH", BOARD_WIDTH),
            board_height: dim("TETRIS_BOARD_HEIGHT", BOARD_HEIGHT),
            records_path: value("TETRIS_RECORDS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_PATH)),
            player: value("TETRIS_PLAYER").unwrap_or_else(|| DEFAULT_PLAYER.to_string()),
            seed: value("TETRIS_SEED").and_then(|s| s.parse().ok()),
            log_path: value("TETRIS_LOG_PATH").map(PathBuf::from),
        }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
