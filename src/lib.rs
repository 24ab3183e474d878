//! Falling-block rule engine (workspace facade crate).
//!
//! The rules live in dedicated crates under `crates/`; this package re-exports
//! them under one name and adds what only the terminal driver needs: the
//! [`app`] command state, environment [`config`], leaderboard [`records`]
//! persistence and the optional [`event_log`].

pub use tetris_rules_core as core;
pub use tetris_rules_input as input;
pub use tetris_rules_term as term;
pub use tetris_rules_types as types;

pub mod app;
pub mod config;
pub mod event_log;
pub mod records;

pub use app::App;
pub use config::Config;
