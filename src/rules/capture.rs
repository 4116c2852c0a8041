//! Applying moves: relocation, promotion and capture removal
//!
//! A move is only applied after it is found in the piece's legal-move map,
//! so a rejected request leaves the board untouched.

use crate::board::{Board, Pos};
use crate::error::{GameError, GameResult};

use super::moves::{capture_moves, legal_moves};

/// Outcome of applying one legal move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Pos,
    pub to: Pos,
    /// Pieces removed by this move, in jump order
    pub captured: Vec<Pos>,
    /// The piece was crowned by landing on its promotion row
    pub promoted: bool,
    /// The move captured and the piece can capture again from `to`
    pub must_continue: bool,
}

impl AppliedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// Validate `from -> to` against the legal-move map and apply it.
///
/// Fails with `NoPiece` if `from` is empty and `InvalidMove` if `to` is not
/// one of the piece's destinations. The board is not modified on error.
pub fn apply_move(board: &mut Board, from: Pos, to: Pos) -> GameResult<AppliedMove> {
    if board.get(from).is_none() {
        return Err(GameError::NoPiece { pos: from });
    }
    let moves = legal_moves(board, from);
    let captured = moves
        .get(&to)
        .cloned()
        .ok_or(GameError::InvalidMove { from, to })?;

    Ok(execute_move(board, from, to, captured))
}

/// Apply a move already taken from the legal-move map.
///
/// Continuation is decided with the king status the piece had before this
/// move, so a man crowned mid-chain only gains king directions next turn.
pub fn execute_move(board: &mut Board, from: Pos, to: Pos, captured: Vec<Pos>) -> AppliedMove {
    let was_king = board.get(from).is_some_and(|piece| piece.king);
    let color = board.color_at(from);

    let promoted = board.move_piece(from, to);
    board.remove_pieces(&captured);

    let must_continue = match color {
        Some(color) if !captured.is_empty() => {
            !capture_moves(board, to, color, was_king).is_empty()
        }
        _ => false,
    };

    AppliedMove {
        from,
        to,
        captured,
        promoted,
        must_continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    #[test]
    fn test_apply_simple_move() {
        let mut board = Board::new();
        let applied = apply_move(&mut board, Pos::new(6, 1), Pos::new(5, 0)).unwrap();

        assert_eq!(applied.captured, vec![]);
        assert!(!applied.promoted);
        assert!(!applied.must_continue);
        assert!(!applied.is_capture());
        assert_eq!(board.color_at(Pos::new(5, 0)), Some(Color::Light));
        assert!(board.is_empty(Pos::new(6, 1)));
    }

    #[test]
    fn test_invalid_move_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board;

        assert_eq!(
            apply_move(&mut board, Pos::new(6, 1), Pos::new(4, 1)),
            Err(GameError::InvalidMove {
                from: Pos::new(6, 1),
                to: Pos::new(4, 1)
            })
        );
        // Backwards for a man
        assert!(apply_move(&mut board, Pos::new(6, 1), Pos::new(7, 0)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_piece() {
        let mut board = Board::new();
        assert_eq!(
            apply_move(&mut board, Pos::new(4, 1), Pos::new(3, 2)),
            Err(GameError::NoPiece { pos: Pos::new(4, 1) })
        );
    }

    #[test]
    fn test_capture_removes_and_continues() {
        let mut board = board("
            ..........
            ..........
            ...d......
            ..........
            ...d......
            ..........
            ...d......
            ..l.......
            ..........
            ..........
        ");

        let applied = apply_move(&mut board, Pos::new(7, 2), Pos::new(5, 4)).unwrap();
        assert_eq!(applied.captured, vec![Pos::new(6, 3)]);
        assert!(applied.must_continue);
        assert!(board.is_empty(Pos::new(6, 3)));
        assert_eq!(board.pieces_left(Color::Dark), 2);

        let applied = apply_move(&mut board, Pos::new(5, 4), Pos::new(3, 2)).unwrap();
        assert_eq!(applied.captured, vec![Pos::new(4, 3)]);
        assert!(applied.must_continue);

        let applied = apply_move(&mut board, Pos::new(3, 2), Pos::new(1, 4)).unwrap();
        assert_eq!(applied.captured, vec![Pos::new(2, 3)]);
        assert!(!applied.must_continue);
        assert_eq!(board.pieces_left(Color::Dark), 0);
    }

    #[test]
    fn test_full_chain_in_one_move() {
        let mut board = board("
            ..........
            ..........
            ...d......
            ..........
            ...d......
            ..........
            ...d......
            ..l.......
            ..........
            ..........
        ");

        let applied = apply_move(&mut board, Pos::new(7, 2), Pos::new(1, 4)).unwrap();
        assert_eq!(applied.captured.len(), 3);
        assert!(!applied.must_continue);
        assert_eq!(board.pieces_left(Color::Dark), 0);
        assert_eq!(board.total_pieces(), 1);
    }

    #[test]
    fn test_promotion_reported() {
        let mut board = board("
            ..........
            ..l.......
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
        ");

        let applied = apply_move(&mut board, Pos::new(1, 2), Pos::new(0, 1)).unwrap();
        assert!(applied.promoted);
        assert_eq!(board.kings(Color::Light), 1);
    }

    #[test]
    fn test_crowned_man_does_not_continue_backwards() {
        // Light man jumps onto row 0 and is crowned; the dark man on (1,6)
        // could only be taken by a king moving down
        let mut board = board("
            ..........
            ....d.d...
            ...l......
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
        ");

        let applied = apply_move(&mut board, Pos::new(2, 3), Pos::new(0, 5)).unwrap();
        assert!(applied.promoted);
        assert_eq!(applied.captured, vec![Pos::new(1, 4)]);
        assert!(!applied.must_continue);
        assert!(!capture_moves(&board, Pos::new(0, 5), Color::Light, true).is_empty());
    }

    #[test]
    fn test_capturing_a_king_updates_counters() {
        let mut board = board("
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ...D......
            ..l.......
            ..........
            ..........
        ");

        apply_move(&mut board, Pos::new(7, 2), Pos::new(5, 4)).unwrap();
        assert_eq!(board.pieces_left(Color::Dark), 0);
        assert_eq!(board.kings(Color::Dark), 0);
    }
}
