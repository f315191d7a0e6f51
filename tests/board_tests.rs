//! Board tests - engine behavior through the public facade

use fifteen::core::Board;
use fifteen::types::{Cell, Dim, DIM_MAX, DIM_MIN};

fn dim(d: u8) -> Dim {
    Dim::new(d).expect("test dimension")
}

/// Values actually on the board, blank as 0, sorted.
fn sorted_values(board: &Board) -> Vec<u8> {
    let mut values: Vec<u8> = board.cells().iter().map(|c| c.unwrap_or(0)).collect();
    values.sort_unstable();
    values
}

#[test]
fn test_new_board_holds_every_value_once() {
    for d in DIM_MIN..=DIM_MAX {
        let board = Board::new(dim(d));
        let count = board.dim().cell_count();
        let expected: Vec<u8> = (0..count as u8).collect();
        assert_eq!(sorted_values(&board), expected, "dimension {d}");
    }
}

#[test]
fn test_new_board_blank_in_bottom_right() {
    for d in DIM_MIN..=DIM_MAX {
        let board = Board::new(dim(d));
        let last = (d - 1) as i8;
        assert!(board.is_blank(last, last), "dimension {d}");
        assert!(!board.is_won(), "dimension {d}");
    }
}

#[test]
fn test_new_3x3_layout() {
    let board = Board::new(dim(3));
    let rows: Vec<&[Cell]> = board.rows().collect();
    assert_eq!(rows[0], &[Some(8), Some(7), Some(6)]);
    assert_eq!(rows[1], &[Some(5), Some(4), Some(3)]);
    assert_eq!(rows[2], &[Some(2), Some(1), None]);
}

#[test]
fn test_new_even_dimension_parity_swap() {
    // Raw descending fill would end ..., 2, 1, blank; the playable layout
    // exchanges those two tiles.
    let board = Board::new(dim(4));
    assert_eq!(board.get(3, 0), Some(Some(3)));
    assert_eq!(board.get(3, 1), Some(Some(1)));
    assert_eq!(board.get(3, 2), Some(Some(2)));
    assert_eq!(board.get(3, 3), Some(None));

    let board = Board::new(dim(6));
    let last = 5;
    assert_eq!(board.get(last, 3), Some(Some(1)));
    assert_eq!(board.get(last, 4), Some(Some(2)));
    assert_eq!(board.get(last, 5), Some(None));
}

#[test]
fn test_odd_dimension_skips_parity_swap() {
    for d in [3u8, 5, 7, 9] {
        let board = Board::new(dim(d));
        let last = (d - 1) as i8;
        assert_eq!(board.get(last, last - 2), Some(Some(2)), "dimension {d}");
        assert_eq!(board.get(last, last - 1), Some(Some(1)), "dimension {d}");
    }
}

#[test]
fn test_slide_rejects_out_of_range_tiles() {
    let mut board = Board::new(dim(3));
    let before = board.clone();
    for tile in [0u8, 9, 10, 200, 255] {
        assert!(!board.slide(tile), "tile {tile}");
        assert_eq!(board, before, "tile {tile}");
    }
}

#[test]
fn test_slide_rejects_tile_away_from_blank() {
    let mut board = Board::new(dim(3));
    let before = board.clone();
    // Blank is at (2, 2); none of these touch it.
    for tile in [8u8, 7, 6, 5, 4, 2] {
        assert!(!board.slide(tile), "tile {tile}");
        assert_eq!(board, before, "tile {tile}");
    }
}

#[test]
fn test_slide_swaps_tile_and_blank() {
    let mut board = Board::new(dim(3));
    // Tile 1 at (2, 1), blank at (2, 2).
    assert!(board.slide(1));
    assert_eq!(board.position_of(1), Some((2, 2)));
    assert!(board.is_blank(2, 1));
}

#[test]
fn test_slide_across_rows() {
    let mut board = Board::new(dim(3));
    // Tile 3 at (1, 2), blank directly below at (2, 2).
    assert!(board.slide(3));
    assert_eq!(board.position_of(3), Some((2, 2)));
    assert!(board.is_blank(1, 2));
}

#[test]
fn test_slide_is_its_own_inverse() {
    let mut board = Board::new(dim(3));
    let initial = board.clone();

    assert!(board.slide(1));
    assert_ne!(board, initial);
    assert!(board.slide(1));
    assert_eq!(board, initial);
}

#[test]
fn test_won_after_final_slide() {
    let mut board = Board::from_cells(
        dim(3),
        vec![
            Some(1),
            Some(2),
            Some(3),
            Some(4),
            Some(5),
            Some(6),
            Some(7),
            None,
            Some(8),
        ],
    )
    .unwrap();
    assert!(!board.is_won());

    assert!(board.slide(8));
    assert!(board.is_won());
}

#[test]
fn test_is_won_matches_row_major_ranks() {
    let count = dim(4).cell_count();
    let solved: Vec<Cell> = (0..count)
        .map(|k| {
            if k == count - 1 {
                None
            } else {
                Some((k + 1) as u8)
            }
        })
        .collect();
    let board = Board::from_cells(dim(4), solved).unwrap();
    assert!(board.is_won());
}
