//! Player input module (game-loop facing).
//!
//! This module is intentionally independent of any terminal machinery. It
//! maps lines of text into [`Command`] values and reads them from any
//! `BufRead`, so the parsing is unit-testable without a terminal attached.

pub mod command;

pub use fifteen_types as types;

pub use command::{parse_command, read_command, Command, TILE_PROMPT};
