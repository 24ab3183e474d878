//! Terminal presentation for a game session.
//!
//! - [`frame`]: a plain grid of styled glyphs
//! - [`colors`]: per-cell colors of landed pieces, kept by the driver
//! - [`view`]: pure mapping from a session (plus leaderboard) to a frame
//! - [`renderer`]: writes frames to the terminal with crossterm
//!
//! The view holds no rules; it only reads the session's public state.

pub mod colors;
pub mod frame;
pub mod renderer;
pub mod view;

pub use tetris_rules_core as core;
pub use tetris_rules_types as types;

pub use colors::SettledColors;
pub use frame::{Frame, Glyph, Rgb};
pub use renderer::{encode_into, TerminalRenderer};
pub use view::{piece_rgb, Overlay, SessionView};
