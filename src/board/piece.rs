//! Quarto pieces and piece sets
//!
//! Each of the 16 pieces encodes 4 independent binary attributes in the low
//! bits of its index: height, color, shape, and fill. Two pieces share a
//! characteristic when they agree on at least one attribute bit.

/// One of the 16 Quarto pieces.
///
/// The index doubles as the attribute bit pattern, so attribute comparisons
/// reduce to bitwise operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces
    pub const COUNT: usize = 16;

    /// Mask covering the 4 attribute bits
    pub const ATTRIBUTE_MASK: u8 = 0b1111;

    const TALL: u8 = 0b0001;
    const DARK: u8 = 0b0010;
    const ROUND: u8 = 0b0100;
    const HOLLOW: u8 = 0b1000;

    #[inline]
    pub const fn from_index(index: u8) -> Self {
        debug_assert!(index < Self::COUNT as u8);
        Self(index)
    }

    /// Checked constructor for untrusted indices (wire input).
    #[inline]
    pub fn checked(index: u8) -> Option<Self> {
        if index < Self::COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Attribute bit pattern (identical to the index)
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_tall(self) -> bool {
        self.0 & Self::TALL != 0
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        self.0 & Self::DARK != 0
    }

    #[inline]
    pub const fn is_round(self) -> bool {
        self.0 & Self::ROUND != 0
    }

    #[inline]
    pub const fn is_hollow(self) -> bool {
        self.0 & Self::HOLLOW != 0
    }

    /// All 16 pieces in index order
    #[inline]
    pub fn all() -> impl Iterator<Item = Piece> {
        (0..Self::COUNT as u8).map(Piece)
    }
}

/// Set of pieces backed by a 16-bit mask, one bit per piece index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PieceSet(u16);

impl PieceSet {
    /// Empty set
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Set containing all 16 pieces
    #[inline]
    pub const fn full() -> Self {
        Self(u16::MAX)
    }

    #[inline]
    pub fn insert(&mut self, piece: Piece) {
        self.0 |= 1 << piece.index();
    }

    #[inline]
    pub fn remove(&mut self, piece: Piece) {
        self.0 &= !(1 << piece.index());
    }

    /// Copy of this set with `piece` removed
    #[inline]
    #[must_use]
    pub fn without(self, piece: Piece) -> Self {
        Self(self.0 & !(1 << piece.index()))
    }

    #[inline]
    pub fn contains(self, piece: Piece) -> bool {
        self.0 & (1 << piece.index()) != 0
    }

    #[inline]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate pieces in index order
    #[inline]
    pub fn iter(self) -> PieceSetIter {
        PieceSetIter(self.0)
    }
}

impl FromIterator<Piece> for PieceSet {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        let mut set = Self::new();
        for piece in iter {
            set.insert(piece);
        }
        set
    }
}

impl IntoIterator for PieceSet {
    type Item = Piece;
    type IntoIter = PieceSetIter;

    fn into_iter(self) -> PieceSetIter {
        self.iter()
    }
}

pub struct PieceSetIter(u16);

impl Iterator for PieceSetIter {
    type Item = Piece;

    #[inline]
    fn next(&mut self) -> Option<Piece> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Piece::from_index(idx))
    }
}
