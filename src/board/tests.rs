use super::*;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Dark.opponent(), Color::Light);
    assert_eq!(Color::Light.opponent(), Color::Dark);
}

#[test]
fn test_color_directions() {
    assert_eq!(Color::Dark.forward(), 1);
    assert_eq!(Color::Light.forward(), -1);
    assert_eq!(Color::Dark.home_row(), 0);
    assert_eq!(Color::Light.home_row(), 9);
    assert_eq!(Color::Dark.promotion_row(), 9);
    assert_eq!(Color::Light.promotion_row(), 0);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(4, 5);
    assert_eq!(pos.row, 4);
    assert_eq!(pos.col, 5);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(4, 5);
    assert_eq!(pos.to_index(), 45);

    let pos2 = Pos::from_index(45);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(9, 9));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(10, 0));
    assert!(!Pos::is_valid(0, 10));
}

#[test]
fn test_pos_checked() {
    assert_eq!(Pos::checked(3, 4), Ok(Pos::new(3, 4)));
    assert_eq!(
        Pos::checked(10, 2),
        Err(GameError::OutOfBounds { row: 10, col: 2 })
    );
    assert_eq!(
        Pos::checked(-1, 2),
        Err(GameError::OutOfBounds { row: -1, col: 2 })
    );
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 9);
    assert_eq!(pos.offset(1, -1), Some(Pos::new(1, 8)));
    assert_eq!(pos.offset(-1, -1), None);
    assert_eq!(pos.offset(1, 1), None);
}

#[test]
fn test_playable_squares() {
    assert!(!Pos::new(0, 0).is_playable());
    assert!(Pos::new(0, 1).is_playable());
    assert!(Pos::new(9, 0).is_playable());
    assert!(!Pos::new(9, 9).is_playable());
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 10);
    assert_eq!(TOTAL_CELLS, 100);
    assert_eq!(PIECES_PER_SIDE, 20);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(7, 2).to_string(), "(7, 2)");
}
