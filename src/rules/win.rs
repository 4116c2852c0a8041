//! Terminal conditions
//!
//! A side loses when it has no pieces left or none of its pieces can move.
//! Both colors are checked on every call, whoever is to move.

use std::fmt;

use crate::board::{Board, Color};

use super::moves::has_legal_move;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Win(Color),
    Draw,
}

impl GameOutcome {
    /// Winning color, if any
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Win(color) => Some(color),
            GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(color) => write!(f, "{color} wins"),
            GameOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Winner of the position, if it is terminal.
///
/// Checked in order: Light out of pieces, Dark out of pieces, Light unable
/// to move, Dark unable to move. The first condition that holds decides.
pub fn winner(board: &Board) -> Option<Color> {
    if board.pieces_left(Color::Light) == 0 {
        return Some(Color::Dark);
    }
    if board.pieces_left(Color::Dark) == 0 {
        return Some(Color::Light);
    }
    if !has_legal_move(board, Color::Light) {
        return Some(Color::Dark);
    }
    if !has_legal_move(board, Color::Dark) {
        return Some(Color::Light);
    }
    None
}

/// True if either side has won
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_initial_board_has_no_winner() {
        assert_eq!(winner(&Board::new()), None);
        assert!(!is_game_over(&Board::new()));
    }

    #[test]
    fn test_lone_piece_wins() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(5, 4), Color::Dark, false);
        assert_eq!(winner(&board), Some(Color::Dark));

        let mut board = Board::empty();
        board.place_piece(Pos::new(5, 4), Color::Light, true);
        assert_eq!(winner(&board), Some(Color::Light));
    }

    #[test]
    fn test_blocked_side_loses() {
        // Light man on (9,0) wedged behind dark men with no jump available
        let board: Board = "
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..d.......
            .d........
            l.........
        "
        .parse()
        .unwrap();

        assert!(!has_legal_move(&board, Color::Light));
        assert_eq!(winner(&board), Some(Color::Dark));
    }

    #[test]
    fn test_immobile_side_loses_even_when_not_to_move() {
        // Dark man stuck on the last row: Light wins regardless of turn
        let board: Board = "
            ..........
            ..........
            ..........
            ..........
            .....l....
            ..........
            ..........
            ..........
            ..........
            d.........
        "
        .parse()
        .unwrap();

        assert_eq!(winner(&board), Some(Color::Light));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(GameOutcome::Win(Color::Light).to_string(), "Light wins");
        assert_eq!(GameOutcome::Draw.to_string(), "draw");
        assert_eq!(GameOutcome::Win(Color::Dark).winner(), Some(Color::Dark));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
