//! Game-phase classification
//!
//! The phase only drives search depth and evaluation polarity; it never
//! affects move legality.

use crate::board::GameState;
use crate::rules::{common_characteristics, get_all_lines, get_available_cells};

/// How far along the game is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

/// Free-cell count at or below which the game counts as late regardless of
/// line content
const LATE_FREE_CELLS: u32 = 8;

/// Threat count above which the game counts as late
const LATE_THREAT_LINES: u32 = 2;

/// Classify the game into EARLY, MID, or LATE.
///
/// Counts lines whose placed pieces share an attribute with exactly three
/// filled cells (`three_same`) and exactly two (`two_same`). The rules apply
/// in order: LATE when `three_same > 2` or at most 8 cells remain free, MID
/// when any sharing pair exists, EARLY otherwise.
#[must_use]
pub fn classify_phase(game: &GameState) -> GamePhase {
    let mut three_same = 0u32;
    let mut two_same = 0u32;
    for line in get_all_lines(&game.board) {
        if common_characteristics(line.iter().flatten().copied()) {
            match line.iter().flatten().count() {
                3 => three_same += 1,
                2 => two_same += 1,
                _ => {}
            }
        }
    }

    if three_same > LATE_THREAT_LINES || get_available_cells(game).len() <= LATE_FREE_CELLS {
        GamePhase::Late
    } else if two_same > 0 {
        GamePhase::Mid
    } else {
        GamePhase::Early
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell, Piece};

    #[test]
    fn test_empty_board_is_early() {
        let game = GameState::new(Board::new(), Piece::from_index(0));
        assert_eq!(classify_phase(&game), GamePhase::Early);
    }

    #[test]
    fn test_non_sharing_pieces_stay_early() {
        let mut board = Board::new();
        // Complementary pieces in the same row share nothing
        board.place(Cell::new(0, 0), Piece::from_index(0));
        board.place(Cell::new(0, 1), Piece::from_index(15));
        let game = GameState::new(board, Piece::from_index(1));
        assert_eq!(classify_phase(&game), GamePhase::Early);
    }

    #[test]
    fn test_one_sharing_pair_is_mid() {
        let mut board = Board::new();
        board.place(Cell::new(0, 1), Piece::from_index(0));
        board.place(Cell::new(0, 2), Piece::from_index(1));
        let game = GameState::new(board, Piece::from_index(2));
        assert_eq!(classify_phase(&game), GamePhase::Mid);
    }

    #[test]
    fn test_eight_free_cells_is_late_regardless_of_lines() {
        let mut board = Board::new();
        // Fill rows 0 and 1 with pieces chosen so no line shares an
        // attribute: each row and each column holds a complementary pair.
        for (cell, idx) in [
            (Cell::new(0, 0), 0u8),
            (Cell::new(0, 1), 15),
            (Cell::new(0, 2), 1),
            (Cell::new(0, 3), 14),
            (Cell::new(1, 0), 12),
            (Cell::new(1, 1), 3),
            (Cell::new(1, 2), 13),
            (Cell::new(1, 3), 2),
        ] {
            board.place(cell, Piece::from_index(idx));
        }
        let game = GameState::new(board, Piece::from_index(4));
        assert_eq!(get_available_cells(&game).len(), 8);
        assert_eq!(classify_phase(&game), GamePhase::Late);
    }

    #[test]
    fn test_three_threat_lines_is_late() {
        let mut board = Board::new();
        // Row 0, column 0 and the main diagonal each hold a sharing triple
        // (all pieces tall) while only 7 cells are occupied, so the
        // free-cell rule does not fire.
        for (cell, idx) in [
            (Cell::new(0, 0), 1u8),
            (Cell::new(0, 1), 3),
            (Cell::new(0, 2), 5),
            (Cell::new(1, 0), 7),
            (Cell::new(2, 0), 9),
            (Cell::new(1, 1), 11),
            (Cell::new(2, 2), 13),
        ] {
            board.place(cell, Piece::from_index(idx));
        }
        let game = GameState::new(board, Piece::from_index(15));
        assert!(get_available_cells(&game).len() > 8);
        assert_eq!(classify_phase(&game), GamePhase::Late);
    }
}
