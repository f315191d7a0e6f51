//! Startup configuration parsed from the command line.

use std::error::Error;
use std::fmt;
use std::io;

use fifteen_types::{Dim, DIM_MAX, DIM_MIN};

/// Everything the game loop needs to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub dim: Dim,
}

impl GameConfig {
    /// Parse the program arguments (without the program name).
    ///
    /// Expects exactly one positional argument, the board dimension.
    pub fn from_args<I>(mut args: I) -> Result<Self, SetupError>
    where
        I: Iterator<Item = String>,
    {
        let dim_arg = args.next().ok_or(SetupError::Usage)?;
        if args.next().is_some() {
            return Err(SetupError::Usage);
        }

        let value: u8 = dim_arg.parse().map_err(|_| SetupError::DimOutOfRange)?;
        let dim = Dim::new(value).ok_or(SetupError::DimOutOfRange)?;

        Ok(Self { dim })
    }
}

/// Startup failures, each tied to a process exit code.
#[derive(Debug)]
pub enum SetupError {
    /// Wrong argument count.
    Usage,
    /// Dimension argument missing from [DIM_MIN, DIM_MAX] (or unparseable).
    DimOutOfRange,
    /// The move log file could not be opened for writing.
    LogOpen(io::Error),
}

impl SetupError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::Usage => 1,
            SetupError::DimOutOfRange => 2,
            SetupError::LogOpen(_) => 3,
        }
    }

    /// User-facing message, when there is one.
    ///
    /// A log-open failure exits silently; the exit code is the signal.
    pub fn message(&self) -> Option<String> {
        match self {
            SetupError::Usage => Some("Usage: fifteen d".to_string()),
            SetupError::DimOutOfRange => Some(format!(
                "Board must be between {min} x {min} and {max} x {max}, inclusive.",
                min = DIM_MIN,
                max = DIM_MAX,
            )),
            SetupError::LogOpen(_) => None,
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Usage => write!(f, "wrong argument count"),
            SetupError::DimOutOfRange => write!(
                f,
                "dimension must be in [{DIM_MIN}, {DIM_MAX}]"
            ),
            SetupError::LogOpen(err) => write!(f, "could not open move log: {err}"),
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SetupError::LogOpen(err) => Some(err),
            _ => None,
        }
    }
}
