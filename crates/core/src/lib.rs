//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the sliding-puzzle rules and nothing else. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: `Board::new` always produces the same starting layout
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, headless)
//!
//! # Game Rules
//!
//! - The board starts in the descending "reversed" layout with the blank in
//!   the bottom-right corner; on even-dimension boards tiles 1 and 2 are
//!   exchanged so the puzzle is solvable under standard 15-puzzle parity.
//! - A move names a tile; it slides into the blank only when orthogonally
//!   adjacent to it. Illegal moves leave the board untouched.
//! - The game is won when the tiles read 1..d*d-1 in row-major order with
//!   the blank last.
//!
//! # Example
//!
//! ```
//! use fifteen_core::Board;
//! use fifteen_types::Dim;
//!
//! let dim = Dim::new(3).unwrap();
//! let mut board = Board::new(dim);
//!
//! // Tile 1 starts next to the blank and can slide into it.
//! assert!(board.slide(1));
//! assert!(!board.is_won());
//! ```

pub mod board;

pub use fifteen_types as types;

pub use board::Board;
