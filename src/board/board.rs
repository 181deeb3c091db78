//! Board structure with packed snapshot keys

use super::{Cell, CellSet, Piece, PieceSet, TOTAL_CELLS};

/// 4x4 game board; each slot holds an optional piece.
///
/// The board is mutated destructively during search and restored by the
/// caller of each recursive step, so cloning only happens at the entry
/// point of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: [Option<Piece>; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            slots: [None; TOTAL_CELLS],
        }
    }

    /// Get piece at a cell
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        self.slots[cell.to_index()]
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.slots[cell.to_index()].is_none()
    }

    /// Place a piece on a cell
    #[inline]
    pub fn place(&mut self, cell: Cell, piece: Piece) {
        self.slots[cell.to_index()] = Some(piece);
    }

    /// Remove the piece from a cell
    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        self.slots[cell.to_index()] = None;
    }

    /// Number of placed pieces
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.slots.iter().filter(|s| s.is_some()).count() as u32
    }

    /// Check if the board has no pieces
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    /// Set of empty cells
    pub fn empty_cells(&self) -> CellSet {
        (0..TOTAL_CELLS)
            .filter(|&idx| self.slots[idx].is_none())
            .map(Cell::from_index)
            .collect()
    }

    /// Set of pieces currently placed on the board
    pub fn placed_pieces(&self) -> PieceSet {
        self.slots.iter().flatten().copied().collect()
    }

    /// Packed immutable snapshot of the position.
    ///
    /// Each slot takes 5 bits: an occupancy flag plus the 4 attribute bits
    /// of the piece, 80 bits total. Used as the board component of the
    /// search cache key, so equal keys mean bit-for-bit equal boards.
    #[must_use]
    pub fn key(&self) -> u128 {
        let mut key: u128 = 0;
        for slot in &self.slots {
            let packed = match slot {
                Some(piece) => 0b1_0000 | u128::from(piece.index()),
                None => 0,
            };
            key = (key << 5) | packed;
        }
        key
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Game state as seen by an agent at the start of its turn.
///
/// `current_piece` is the piece the acting player must place. Unplaced
/// pieces and empty cells are derived from the board by the rules module,
/// which keeps them consistent with the grid by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_piece: Piece,
}

impl GameState {
    pub fn new(board: Board, current_piece: Piece) -> Self {
        Self {
            board,
            current_piece,
        }
    }
}
