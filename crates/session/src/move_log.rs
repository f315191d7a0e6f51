//! Append-only text log of board snapshots and attempted moves.
//!
//! The log is a side-channel for external verification: one board snapshot
//! per loop iteration (rows as `|`-separated values, blank written as 0),
//! followed by the attempted tile number when the player entered one. It is
//! flushed after every record and never read back by the game.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use fifteen_core::Board;
use fifteen_types::Tile;

/// Default log file name, opened in truncate-write mode at startup.
pub const LOG_FILE: &str = "log.txt";

pub struct MoveLog {
    out: BufWriter<File>,
}

impl MoveLog {
    /// Create (or truncate) the log file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Append the current board, row-major, one row per line.
    pub fn record_board(&mut self, board: &Board) -> io::Result<()> {
        for row in board.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(self.out, "|")?;
                }
                write!(self.out, "{}", cell.unwrap_or(0))?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    /// Append an attempted tile number on its own line.
    pub fn record_move(&mut self, tile: Tile) -> io::Result<()> {
        writeln!(self.out, "{tile}")?;
        self.out.flush()
    }
}
