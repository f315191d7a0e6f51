//! Screen: flushes board text to a real terminal.
//!
//! This module intentionally keeps the drawing API small: clear-and-home,
//! print rows, print a prompt. Everything is queued through crossterm and
//! flushed explicitly so the player never waits on buffered output.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

pub struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Clear the screen and home the cursor (ANSI escape sequences).
    pub fn clear(&mut self) -> Result<()> {
        self.stdout.queue(terminal::Clear(ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Print pre-formatted rows, one per line.
    pub fn draw_rows<I, S>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row in rows {
            self.stdout.queue(Print(row.as_ref()))?;
            self.stdout.queue(Print("\n"))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    /// Print a prompt without a trailing newline and flush, so the cursor
    /// waits at the end of the prompt text.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.stdout.queue(Print(text))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Print a single message line.
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.stdout.queue(Print(text))?;
        self.stdout.queue(Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
