//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimension bounds (board is d x d, d in [DIM_MIN, DIM_MAX])
pub const DIM_MIN: u8 = 3;
pub const DIM_MAX: u8 = 9;

/// Pacing constants (in milliseconds)
pub const GREETING_PAUSE_MS: u64 = 200;
pub const REDRAW_PAUSE_MS: u64 = 50;
pub const ILLEGAL_MOVE_PAUSE_MS: u64 = 50;

/// A numbered tile, 1..=d*d-1.
pub type Tile = u8;

/// Cell on the board (None = the blank slot, Some = numbered tile)
pub type Cell = Option<Tile>;

/// Validated board dimension.
///
/// A `Dim` can only hold a value in `[DIM_MIN, DIM_MAX]`, so code that
/// receives one never re-checks the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dim(u8);

impl Dim {
    /// Validate a raw dimension value.
    pub fn new(value: u8) -> Option<Self> {
        (DIM_MIN..=DIM_MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Total number of cells on a board of this dimension.
    pub fn cell_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Highest tile number on a board of this dimension (d*d - 1).
    pub fn max_tile(self) -> Tile {
        (self.cell_count() - 1) as Tile
    }
}

/// Slide directions, named from the moving tile's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Right,
    Left,
    Down,
    Up,
}

impl Dir {
    /// Neighbor offset as (row delta, col delta).
    pub fn offset(self) -> (i8, i8) {
        match self {
            Dir::Right => (0, 1),
            Dir::Left => (0, -1),
            Dir::Down => (1, 0),
            Dir::Up => (-1, 0),
        }
    }
}

/// Fixed probe order when looking for the blank next to a tile.
///
/// Only one neighbor can ever hold the blank, so the order is not
/// observable, but it is kept explicit rather than buried in conditionals.
pub const SLIDE_ORDER: [Dir; 4] = [Dir::Right, Dir::Left, Dir::Down, Dir::Up];
