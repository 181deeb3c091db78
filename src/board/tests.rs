use super::*;

#[test]
fn test_piece_attributes_match_bits() {
    let piece = Piece::from_index(0b1010);
    assert!(!piece.is_tall());
    assert!(piece.is_dark());
    assert!(!piece.is_round());
    assert!(piece.is_hollow());
}

#[test]
fn test_all_sixteen_pieces_distinct() {
    let pieces: Vec<Piece> = Piece::all().collect();
    assert_eq!(pieces.len(), Piece::COUNT);
    for i in 0..pieces.len() {
        for j in (i + 1)..pieces.len() {
            assert_ne!(pieces[i], pieces[j]);
        }
    }
}

#[test]
fn test_cell_index_round_trip() {
    for idx in 0..TOTAL_CELLS {
        let cell = Cell::from_index(idx);
        assert_eq!(cell.to_index(), idx);
    }
    assert_eq!(Cell::new(2, 3).to_index(), 11);
    assert!(Cell::checked(4, 0).is_none());
    assert!(Cell::checked(0, 4).is_none());
}

#[test]
fn test_place_and_clear() {
    let mut board = Board::new();
    let cell = Cell::new(1, 3);
    assert!(board.is_empty(cell));

    board.place(cell, Piece::from_index(6));
    assert_eq!(board.get(cell), Some(Piece::from_index(6)));
    assert_eq!(board.piece_count(), 1);

    board.clear(cell);
    assert!(board.is_empty(cell));
    assert!(board.is_board_empty());
}

#[test]
fn test_empty_cells_and_placed_pieces() {
    let mut board = Board::new();
    board.place(Cell::new(0, 0), Piece::from_index(2));
    board.place(Cell::new(3, 3), Piece::from_index(11));

    let empty = board.empty_cells();
    assert_eq!(empty.len(), 14);
    assert!(!empty.contains(Cell::new(0, 0)));
    assert!(!empty.contains(Cell::new(3, 3)));

    let placed = board.placed_pieces();
    assert_eq!(placed.len(), 2);
    assert!(placed.contains(Piece::from_index(2)));
    assert!(placed.contains(Piece::from_index(11)));
}

#[test]
fn test_board_key_identifies_position() {
    let mut a = Board::new();
    let mut b = Board::new();
    assert_eq!(a.key(), b.key());

    a.place(Cell::new(1, 1), Piece::from_index(0));
    assert_ne!(a.key(), b.key());

    // Same cell, different piece: piece 0 occupied is distinct from empty
    // and from any other piece
    b.place(Cell::new(1, 1), Piece::from_index(1));
    assert_ne!(a.key(), b.key());

    // Same piece, different cell
    let mut c = Board::new();
    c.place(Cell::new(1, 2), Piece::from_index(0));
    assert_ne!(a.key(), c.key());
}

#[test]
fn test_piece_set_operations() {
    let mut set = PieceSet::new();
    assert!(set.is_empty());

    set.insert(Piece::from_index(3));
    set.insert(Piece::from_index(12));
    assert_eq!(set.len(), 2);
    assert!(set.contains(Piece::from_index(3)));

    let reduced = set.without(Piece::from_index(3));
    assert!(!reduced.contains(Piece::from_index(3)));
    // `without` leaves the original untouched
    assert!(set.contains(Piece::from_index(3)));

    assert_eq!(PieceSet::full().len(), 16);
}

#[test]
fn test_cell_set_iterates_in_index_order() {
    let mut set = CellSet::new();
    set.insert(Cell::new(2, 0));
    set.insert(Cell::new(0, 1));
    set.insert(Cell::new(3, 3));
    let cells: Vec<Cell> = set.iter().collect();
    assert_eq!(
        cells,
        vec![Cell::new(0, 1), Cell::new(2, 0), Cell::new(3, 3)]
    );
}

#[test]
fn test_game_state_holds_board_and_piece() {
    let game = GameState::new(Board::new(), Piece::from_index(15));
    assert!(game.board.is_board_empty());
    assert_eq!(game.current_piece, Piece::from_index(15));
}
