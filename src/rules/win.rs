//! Win detection and legal-move derivation
//!
//! A line wins when all four of its cells are filled and the four pieces
//! share at least one attribute. There is no other win condition; a full
//! board without such a line is a draw.

use crate::board::{Board, CellSet, GameState, PieceSet};

use super::lines::{common_characteristics, get_all_lines};

/// Check whether any line of four placed pieces shares an attribute.
#[must_use]
pub fn check_win(board: &Board) -> bool {
    get_all_lines(board).iter().any(|line| {
        line.iter().all(Option::is_some) && common_characteristics(line.iter().flatten().copied())
    })
}

/// Cells still open for placement: exactly the empty board slots.
#[must_use]
pub fn get_available_cells(game: &GameState) -> CellSet {
    game.board.empty_cells()
}

/// Pieces still in the pool: everything not placed and not in hand.
#[must_use]
pub fn get_available_pieces(game: &GameState) -> PieceSet {
    let mut available = PieceSet::full();
    for piece in game.board.placed_pieces() {
        available.remove(piece);
    }
    available.remove(game.current_piece);
    available
}
