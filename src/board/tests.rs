use super::*;
use crate::error::GomokuError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
#[should_panic(expected = "no opponent")]
fn test_empty_has_no_opponent() {
    let _ = Stone::Empty.opponent();
}

#[test]
fn test_stone_numeric_encoding() {
    assert_eq!(Stone::Empty.as_u8(), 0);
    assert_eq!(Stone::Black.as_u8(), 1);
    assert_eq!(Stone::White.as_u8(), 2);
    // 3 - p flips the two players
    assert_eq!(Stone::from_u8(3 - Stone::Black.as_u8()), Some(Stone::White));
    assert_eq!(Stone::from_u8(3), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 3);
    assert_eq!(pos.to_index(15), 3 * 15 + 7);
    assert_eq!(Pos::from_index(52, 15), pos);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_dimensions() {
    assert!(Board::new(25, 25).is_ok());
    assert!(Board::new(1, 1).is_ok());
    assert_eq!(
        Board::new(0, 9),
        Err(GomokuError::InvalidDimensions { width: 0, height: 9 })
    );
    assert!(Board::new(26, 9).is_err());
}

#[test]
fn test_in_bounds() {
    let board = Board::new(15, 9).unwrap();
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(14, 8));
    assert!(!board.in_bounds(15, 0));
    assert!(!board.in_bounds(0, 9));
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, -1));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new(9, 9).unwrap();
    let pos = Pos::new(4, 2);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
    assert_eq!(board, Board::new(9, 9).unwrap());
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(3, 2).unwrap();
    board.place_stone(Pos::new(1, 0), Stone::Black);
    board.place_stone(Pos::new(0, 1), Stone::White);

    assert_eq!(
        board.empty_cells(),
        vec![Pos::new(0, 0), Pos::new(2, 0), Pos::new(1, 1), Pos::new(2, 1)]
    );
}

#[test]
fn test_occupied_row_major() {
    let mut board = Board::new(5, 5).unwrap();
    board.place_stone(Pos::new(3, 3), Stone::Black);
    board.place_stone(Pos::new(4, 0), Stone::White);
    board.place_stone(Pos::new(0, 3), Stone::White);

    let cells: Vec<_> = board.occupied().collect();
    assert_eq!(
        cells,
        vec![
            (Pos::new(4, 0), Stone::White),
            (Pos::new(0, 3), Stone::White),
            (Pos::new(3, 3), Stone::Black),
        ]
    );
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2, 2).unwrap();
    assert!(!board.is_full());
    for (i, pos) in board.empty_cells().into_iter().enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_stone(pos, stone);
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_largest_board_last_cell() {
    let mut board = Board::new(MAX_DIMENSION, MAX_DIMENSION).unwrap();
    let corner = Pos::new(24, 24);
    board.place_stone(corner, Stone::Black);
    assert_eq!(board.get(corner), Stone::Black);
    assert_eq!(corner.to_index(MAX_DIMENSION), MAX_CELLS - 1);
    assert_eq!(board.empty_cells().len(), MAX_CELLS - 1);
}
