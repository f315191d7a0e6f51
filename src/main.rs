//! Terminal Game of Fifteen runner (default binary).
//!
//! Usage: `fifteen d` for a d x d board, d in [3, 9].
//! A plain read-eval-print loop: clear and redraw, block on the tile
//! prompt, try the move, repeat until the board is solved or the player
//! enters 0.

use std::env;
use std::io;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use fifteen::core::Board;
use fifteen::input::{read_command, Command, TILE_PROMPT};
use fifteen::session::{GameConfig, MoveLog, SetupError, LOG_FILE};
use fifteen::term::{BoardView, Screen};
use fifteen::types::{GREETING_PAUSE_MS, ILLEGAL_MOVE_PAUSE_MS, REDRAW_PAUSE_MS};

fn main() -> ExitCode {
    let (config, mut log) = match setup() {
        Ok(parts) => parts,
        Err(err) => {
            if let Some(message) = err.message() {
                println!("{message}");
            }
            return ExitCode::from(err.exit_code());
        }
    };

    match run(&config, &mut log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fifteen: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup() -> Result<(GameConfig, MoveLog), SetupError> {
    let config = GameConfig::from_args(env::args().skip(1))?;
    let log = MoveLog::create(LOG_FILE).map_err(SetupError::LogOpen)?;
    Ok((config, log))
}

fn run(config: &GameConfig, log: &mut MoveLog) -> Result<()> {
    let mut screen = Screen::new();
    let view = BoardView::default();
    let mut board = Board::new(config.dim);
    let stdin = io::stdin();

    greet(&mut screen)?;

    loop {
        screen.clear()?;
        screen.draw_rows(view.rows(&board))?;

        // Log the snapshot every iteration, win screen included.
        log.record_board(&board)?;

        if board.is_won() {
            screen.line("win!")?;
            break;
        }

        let command = loop {
            screen.prompt(TILE_PROMPT)?;
            if let Some(command) = read_command(&mut stdin.lock())? {
                break command;
            }
        };

        match command {
            Command::Quit => break,
            Command::Slide(tile) => {
                // The attempt is logged whether or not it turns out legal.
                log.record_move(tile)?;
                if !board.slide(tile) {
                    screen.line("\nIllegal move.")?;
                    thread::sleep(Duration::from_millis(ILLEGAL_MOVE_PAUSE_MS));
                }
            }
        }

        thread::sleep(Duration::from_millis(REDRAW_PAUSE_MS));
    }

    Ok(())
}

fn greet(screen: &mut Screen) -> Result<()> {
    screen.clear()?;
    screen.line("WELCOME TO GAME OF FIFTEEN")?;
    thread::sleep(Duration::from_millis(GREETING_PAUSE_MS));
    Ok(())
}
