//! Win-checkable lines and the shared-attribute test

use crate::board::{Board, Cell, Piece, BOARD_SIZE};

/// Number of win-checkable lines (4 rows, 4 columns, 2 diagonals)
pub const NUM_LINES: usize = 10;

/// A line as seen on a concrete board: 4 optional-piece slots
pub type Line = [Option<Piece>; BOARD_SIZE];

/// The 10 fixed 4-cell sequences that can win the game
pub const LINES: [[Cell; BOARD_SIZE]; NUM_LINES] = build_lines();

const fn build_lines() -> [[Cell; BOARD_SIZE]; NUM_LINES] {
    let mut lines = [[Cell { row: 0, col: 0 }; BOARD_SIZE]; NUM_LINES];
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            lines[i][j] = Cell {
                row: i as u8,
                col: j as u8,
            };
            lines[BOARD_SIZE + i][j] = Cell {
                row: j as u8,
                col: i as u8,
            };
            j += 1;
        }
        i += 1;
    }
    let mut j = 0;
    while j < BOARD_SIZE {
        lines[2 * BOARD_SIZE][j] = Cell {
            row: j as u8,
            col: j as u8,
        };
        lines[2 * BOARD_SIZE + 1][j] = Cell {
            row: j as u8,
            col: (BOARD_SIZE - 1 - j) as u8,
        };
        j += 1;
    }
    lines
}

/// Read the 10 lines off a board.
#[must_use]
pub fn get_all_lines(board: &Board) -> [Line; NUM_LINES] {
    let mut result = [[None; BOARD_SIZE]; NUM_LINES];
    for (line, cells) in result.iter_mut().zip(LINES.iter()) {
        for (slot, &cell) in line.iter_mut().zip(cells.iter()) {
            *slot = board.get(cell);
        }
    }
    result
}

/// Check whether all given pieces agree on at least one of the 4 attributes.
///
/// An empty sequence vacuously shares every attribute; callers that care
/// about line length filter on the piece count separately.
#[must_use]
pub fn common_characteristics<I>(pieces: I) -> bool
where
    I: IntoIterator<Item = Piece>,
{
    let mut ones = Piece::ATTRIBUTE_MASK;
    let mut zeros = Piece::ATTRIBUTE_MASK;
    for piece in pieces {
        ones &= piece.bits();
        zeros &= !piece.bits() & Piece::ATTRIBUTE_MASK;
    }
    ones | zeros != 0
}
