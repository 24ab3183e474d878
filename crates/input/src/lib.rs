//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Command`]. The mapping is
//! pure so it can be tested without a terminal.

pub mod map;

pub use tetris_rules_types as types;

pub use map::{handle_key_event, should_quit};
