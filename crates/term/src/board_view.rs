//! BoardView: maps `core::Board` into printable text rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use fifteen_core::Board;

/// Board cell width in terminal columns.
pub const CELL_WIDTH: usize = 3;

/// Glyph shown for the blank slot (never the digit 0).
pub const BLANK_GLYPH: char = '_';

/// Formats a board as right-justified fixed-width text rows.
pub struct BoardView {
    cell_width: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        // 3 columns fit the widest tile number (80 on a 9x9 board).
        Self {
            cell_width: CELL_WIDTH,
        }
    }
}

impl BoardView {
    pub fn new(cell_width: usize) -> Self {
        Self { cell_width }
    }

    /// Lazily yield one formatted line per board row, top to bottom.
    ///
    /// The iterator is finite and restartable: calling `rows` again replays
    /// the board's current state.
    pub fn rows<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = String> + 'a {
        board.rows().map(move |row| {
            let mut line = String::with_capacity(row.len() * self.cell_width);
            for cell in row {
                match cell {
                    Some(tile) => {
                        let _ = write!(line, "{:>width$}", tile, width = self.cell_width);
                    }
                    None => {
                        let _ = write!(line, "{:>width$}", BLANK_GLYPH, width = self.cell_width);
                    }
                }
            }
            line
        })
    }

    /// Render the whole board into owned lines.
    pub fn render(&self, board: &Board) -> Vec<String> {
        self.rows(board).collect()
    }
}
