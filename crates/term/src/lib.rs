//! Terminal presentation module.
//!
//! This is a small, line-oriented rendering layer for prompt-driven
//! gameplay. It splits presentation in two:
//!
//! - [`board_view`]: pure `Board` -> text mapping, unit-testable
//! - [`screen`]: the only place that touches the real terminal
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the terminal usable: no raw mode, no alternate screen, plain
//!   clear-and-home before each redraw

pub mod board_view;
pub mod screen;

pub use fifteen_core as core;
pub use fifteen_types as types;

pub use board_view::{BoardView, BLANK_GLYPH, CELL_WIDTH};
pub use screen::Screen;
