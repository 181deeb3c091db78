//! Heuristic evaluation function for Quarto board positions
//!
//! Scores a non-terminal position by how close each of the 10 lines is to
//! completion: a line with three placed pieces sharing an attribute is worth
//! far more than a pair. The score is position-symmetric — it does not know
//! whose turn it is; polarity is applied by the caller.

use crate::board::Board;
use crate::rules::{common_characteristics, get_all_lines};

/// Per-line scoring weights
pub struct LineScore;

impl LineScore {
    /// Three placed pieces in a line sharing an attribute
    pub const TRIPLE: i32 = 10;
    /// Two placed pieces in a line sharing an attribute
    pub const PAIR: i32 = 3;
}

/// Evaluate the board.
///
/// For each line: +10 if exactly three placed pieces share an attribute,
/// +3 if exactly two do, otherwise nothing. Empty lines, lines without a
/// shared attribute, and full lines score zero (a full sharing line would
/// have been caught by the win check before evaluation is reached).
///
/// The result is always non-negative.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for line in get_all_lines(board) {
        let filled = line.iter().flatten().count();
        if common_characteristics(line.iter().flatten().copied()) {
            score += match filled {
                3 => LineScore::TRIPLE,
                2 => LineScore::PAIR,
                _ => 0,
            };
        }
    }
    score
}

/// Negated evaluation, used during the early game.
///
/// The agent deliberately steers away from its own heuristic signal while
/// the position is still wide open, delaying commitment to any line.
#[must_use]
pub fn evaluate_inverted(board: &Board) -> i32 {
    -evaluate(board)
}
