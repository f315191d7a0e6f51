//! Line parsing from the tile prompt to player commands.

use std::io::{self, BufRead};

use fifteen_types::Tile;

/// Prompt shown before every read.
pub const TILE_PROMPT: &str = "Tile to move (0 to exit): ";

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The 0 sentinel: leave the game.
    Quit,
    /// Attempt to slide the named tile (legality is the board's call).
    Slide(Tile),
}

/// Parse one input line into a command.
///
/// 0 quits; any other integer a tile number can hold becomes a slide
/// attempt. Returns `None` for lines that do not name an integer in that
/// range, which callers answer by re-prompting. Integers above the largest
/// tile on the current board still parse here; the board rejects them as
/// illegal moves.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().parse::<Tile>().ok()? {
        0 => Some(Command::Quit),
        tile => Some(Command::Slide(tile)),
    }
}

/// Read one line and parse it.
///
/// `Ok(None)` means the line was not a valid command and should be asked
/// again. End of input maps to [`Command::Quit`] so piped input terminates
/// the game instead of spinning.
pub fn read_command<R: BufRead>(input: &mut R) -> io::Result<Option<Command>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Some(Command::Quit));
    }
    Ok(parse_command(&line))
}
