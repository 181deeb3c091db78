//! Minimax with alpha-beta pruning
//!
//! A Quarto ply is compound: place the piece in hand, then choose the piece
//! handed to the opponent. The branching factor at each node is therefore
//! `|cells| x |pieces|`, strictly shrinking with depth; absolute recursion
//! depth is bounded by 16 regardless of the configured limit.
//!
//! The search mutates the board in place and restores it through a scoped
//! guard, so the caller's board is bit-for-bit identical after every call,
//! including pruning exits and unwinds.

use crate::board::{Board, Cell, CellSet, Piece, PieceSet};
use crate::eval::EvalFn;
use crate::rules::check_win;

use super::cache::{CacheKey, SearchCache};

/// Score of a position already won by the side that just moved
pub const WIN_SCORE: i32 = 1_000;
/// Score of a position already lost by the side to move
pub const LOSE_SCORE: i32 = -1_000;

/// Infinity for alpha-beta bounds
const INF: i32 = WIN_SCORE + 1;

/// Outcome of a search step: the score plus the placement and the piece to
/// hand over that achieve it. Terminal and leaf nodes carry no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub cell: Option<Cell>,
    pub piece: Option<Piece>,
}

impl SearchResult {
    /// Result for an already-decided position
    #[inline]
    pub(crate) const fn terminal(score: i32) -> Self {
        Self {
            score,
            cell: None,
            piece: None,
        }
    }

    /// Result for a horizon or exhausted-pieces leaf
    #[inline]
    pub(crate) const fn leaf(score: i32) -> Self {
        Self {
            score,
            cell: None,
            piece: None,
        }
    }
}

/// Places a piece on construction and clears the cell again on drop, so the
/// board is restored on every exit path out of the enclosing scope.
struct Placement<'a> {
    board: &'a mut Board,
    cell: Cell,
}

impl<'a> Placement<'a> {
    #[inline]
    fn new(board: &'a mut Board, cell: Cell, piece: Piece) -> Self {
        board.place(cell, piece);
        Self { board, cell }
    }

    #[inline]
    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    #[inline]
    fn drop(&mut self) {
        self.board.clear(self.cell);
    }
}

/// Minimax with alpha-beta pruning and depth-qualified memoization.
///
/// Checks run in a fixed order: win detection first (it short-circuits even
/// at depth 0 or on a warm cache, and is never memoized), then the cache
/// probe, then the leaf rule (pieces exhausted or depth 0). Interior nodes
/// try every free cell for the piece in hand and every remaining piece to
/// hand over, pruning both loops when `beta <= alpha`, and memoize the best
/// triple before returning.
///
/// From the maximizing side a won board scores [`LOSE_SCORE`]: the opponent
/// completed a line on the previous ply.
#[allow(clippy::too_many_arguments)]
pub fn search(
    board: &mut Board,
    available_pieces: PieceSet,
    available_cells: CellSet,
    current_piece: Piece,
    maximizing: bool,
    depth: u8,
    cache: &mut SearchCache,
    eval_fn: EvalFn,
    mut alpha: i32,
    mut beta: i32,
) -> SearchResult {
    if check_win(board) {
        let score = if maximizing { LOSE_SCORE } else { WIN_SCORE };
        return SearchResult::terminal(score);
    }

    let key = CacheKey::new(board, current_piece, maximizing, depth);
    if let Some(entry) = cache.probe(&key) {
        return entry;
    }

    if available_pieces.is_empty() || depth == 0 {
        return SearchResult::leaf(eval_fn(board));
    }

    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_cell = None;
    let mut best_piece = None;

    for cell in available_cells {
        // Guard scope: the placement is undone when `placed` drops at the
        // end of this iteration, before the outer pruning check runs.
        {
            let mut placed = Placement::new(board, cell, current_piece);

            for next_piece in available_pieces {
                let result = search(
                    placed.board(),
                    available_pieces.without(next_piece),
                    available_cells.without(cell),
                    next_piece,
                    !maximizing,
                    depth - 1,
                    cache,
                    eval_fn,
                    alpha,
                    beta,
                );

                if maximizing {
                    if result.score > best_score {
                        best_score = result.score;
                        best_cell = Some(cell);
                        best_piece = Some(next_piece);
                    }
                    alpha = alpha.max(best_score);
                } else {
                    if result.score < best_score {
                        best_score = result.score;
                        best_cell = Some(cell);
                        best_piece = Some(next_piece);
                    }
                    beta = beta.min(best_score);
                }

                if beta <= alpha {
                    break;
                }
            }
        }

        if beta <= alpha {
            break;
        }
    }

    let result = SearchResult {
        score: best_score,
        cell: best_cell,
        piece: best_piece,
    };
    cache.store(key, result);
    result
}
