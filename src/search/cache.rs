//! Depth-qualified memo cache for search results
//!
//! The cache key includes the remaining search depth, so the same position
//! reached with a different depth budget populates an independent entry.
//! This is a memo table, not a transposition table: entries are never reused
//! across depth budgets, never evicted, and the table grows for the lifetime
//! of the agent session. Both characteristics are deliberate.
//!
//! The cache is owned by a single agent instance and is not safe for
//! concurrent mutation; callers that share an agent across threads must
//! serialize access externally.

use std::collections::HashMap;

use crate::board::{Board, Piece};

use super::minimax::SearchResult;

/// Immutable composite key: packed board snapshot, piece in hand,
/// side-to-move flag, and remaining depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    board: u128,
    piece: Piece,
    maximizing: bool,
    depth: u8,
}

impl CacheKey {
    #[must_use]
    pub fn new(board: &Board, piece: Piece, maximizing: bool, depth: u8) -> Self {
        Self {
            board: board.key(),
            piece,
            maximizing,
            depth,
        }
    }
}

/// Per-session memo table mapping positions to their best known move.
#[derive(Debug, Default)]
pub struct SearchCache {
    entries: HashMap<CacheKey, SearchResult>,
}

impl SearchCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up a stored result for the exact key.
    #[must_use]
    pub fn probe(&self, key: &CacheKey) -> Option<SearchResult> {
        self.entries.get(key).copied()
    }

    /// Store a result. An existing entry for the same key is overwritten
    /// (the recomputed value is identical by determinism).
    pub fn store(&mut self, key: CacheKey, result: SearchResult) {
        self.entries.insert(key, result);
    }

    /// Number of cached positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_probe_miss_then_hit() {
        let mut cache = SearchCache::new();
        let board = Board::new();
        let key = CacheKey::new(&board, Piece::from_index(0), true, 3);
        assert!(cache.probe(&key).is_none());

        let result = SearchResult {
            score: 7,
            cell: Some(Cell::new(1, 1)),
            piece: Some(Piece::from_index(5)),
        };
        cache.store(key, result);
        assert_eq!(cache.probe(&key), Some(result));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_same_position_different_depth_is_a_different_key() {
        let board = Board::new();
        let piece = Piece::from_index(2);
        let shallow = CacheKey::new(&board, piece, true, 1);
        let deep = CacheKey::new(&board, piece, true, 2);
        assert_ne!(shallow, deep);

        let mut cache = SearchCache::new();
        cache.store(shallow, SearchResult::leaf(0));
        assert!(cache.probe(&deep).is_none());
    }

    #[test]
    fn test_key_distinguishes_piece_and_side() {
        let board = Board::new();
        let a = CacheKey::new(&board, Piece::from_index(0), true, 2);
        let b = CacheKey::new(&board, Piece::from_index(1), true, 2);
        let c = CacheKey::new(&board, Piece::from_index(0), false, 2);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_tracks_board_content() {
        let mut board = Board::new();
        let before = CacheKey::new(&board, Piece::from_index(0), true, 2);
        board.place(Cell::new(2, 2), Piece::from_index(7));
        let after = CacheKey::new(&board, Piece::from_index(0), true, 2);
        assert_ne!(before, after);

        board.clear(Cell::new(2, 2));
        let restored = CacheKey::new(&board, Piece::from_index(0), true, 2);
        assert_eq!(before, restored);
    }
}
