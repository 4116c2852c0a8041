//! Heuristic evaluation of checkers positions
//!
//! The score is built from:
//! - Material (pieces and kings)
//! - Centrality of every piece
//! - Advancement and back-row guard of men
//! - King activity and king mobility
//! - Mobility (pieces that can move)
//!
//! Each side is tallied separately in integers and scaled once, so a
//! position and its mirror image score exactly opposite values.

use crate::board::{Board, Color, Pos, BOARD_SIZE};
use crate::rules::{movable_piece_count, piece_moves};

use super::weights::{EvalWeight, CENTER_MAX, CENTER_MIN};

/// Largest doubled Manhattan distance term; `10 - d2` is the doubled
/// half-width minus distance to the geometric center.
const DOUBLE_HALF_WIDTH: i32 = BOARD_SIZE as i32;

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `perspective`. The function is antisymmetric:
/// `evaluate(b, c) == -evaluate(b, c.opponent())`, and the starting
/// position scores exactly zero.
#[must_use]
pub fn evaluate(board: &Board, perspective: Color) -> f64 {
    let mine = SideTally::collect(board, perspective).score();
    let theirs = SideTally::collect(board, perspective.opponent()).score();
    mine - theirs
}

/// Integer tallies of every evaluation term for one color
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SideTally {
    pieces: i32,
    kings: i32,
    centrality: i32,
    advancement: i32,
    back_row: i32,
    king_opponent_half: i32,
    king_center: i32,
    movable: i32,
    king_destinations: i32,
}

impl SideTally {
    fn collect(board: &Board, color: Color) -> Self {
        let mut tally = SideTally {
            movable: movable_piece_count(board, color) as i32,
            ..SideTally::default()
        };

        for piece in board.pieces(color) {
            tally.pieces += 1;
            tally.centrality += centrality(piece.pos);

            if piece.king {
                tally.kings += 1;
                tally.king_destinations += piece_moves(board, piece).len() as i32;
                if on_opponent_half(piece.pos, color) {
                    tally.king_opponent_half += 1;
                }
                if in_center(piece.pos) {
                    tally.king_center += 1;
                }
            } else {
                tally.advancement += piece.pos.row.abs_diff(color.home_row()) as i32;
                if piece.pos.row == color.home_row() {
                    tally.back_row += 1;
                }
            }
        }

        tally
    }

    fn score(&self) -> f64 {
        self.pieces as f64 * EvalWeight::PIECE
            + self.kings as f64 * (EvalWeight::KING + EvalWeight::KING_ACTIVE)
            + self.centrality as f64 * EvalWeight::CENTRALITY
            + self.advancement as f64 * EvalWeight::ADVANCEMENT
            + self.back_row as f64 * EvalWeight::BACK_ROW
            + self.king_opponent_half as f64 * EvalWeight::KING_OPPONENT_HALF
            + self.king_center as f64 * EvalWeight::KING_CENTER
            + self.movable as f64 * EvalWeight::MOBILITY
            + self.king_destinations as f64 * EvalWeight::KING_MOBILITY
    }
}

/// Doubled centrality: `10 - (|2r - 9| + |2c - 9|)`, from 8 in the middle
/// four cells down to -8 in the corners.
#[inline]
fn centrality(pos: Pos) -> i32 {
    let edge = BOARD_SIZE as i32 - 1;
    let dist2 = (2 * pos.row as i32 - edge).abs() + (2 * pos.col as i32 - edge).abs();
    DOUBLE_HALF_WIDTH - dist2
}

#[inline]
fn on_opponent_half(pos: Pos, color: Color) -> bool {
    let half = (BOARD_SIZE / 2) as u8;
    match color {
        Color::Dark => pos.row >= half,
        Color::Light => pos.row < half,
    }
}

#[inline]
fn in_center(pos: Pos) -> bool {
    (CENTER_MIN..=CENTER_MAX).contains(&pos.row) && (CENTER_MIN..=CENTER_MAX).contains(&pos.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Color::Dark), 0.0);
        assert_eq!(evaluate(&board, Color::Light), 0.0);
    }

    #[test]
    fn test_initial_tallies_match() {
        let board = Board::new();
        let dark = SideTally::collect(&board, Color::Dark);
        let light = SideTally::collect(&board, Color::Light);
        assert_eq!(dark, light);
        assert_eq!(dark.pieces, 20);
        assert_eq!(dark.back_row, 5);
        assert_eq!(dark.movable, 5);
        assert_eq!(dark.kings, 0);
    }

    #[test]
    fn test_antisymmetric() {
        let positions = [
            board("
                .d.d.d.d.d
                ..........
                ...d.d....
                ..........
                .....L....
                ..........
                ...l......
                ..........
                ..........
                l.l.l.....
            "),
            board("
                ..........
                ..........
                ..........
                ....D.....
                ..........
                ..........
                ..........
                ..........
                .l........
                ..........
            "),
        ];

        for board in &positions {
            let dark = evaluate(board, Color::Dark);
            let light = evaluate(board, Color::Light);
            assert_eq!(dark, -light);
        }
    }

    #[test]
    fn test_material_advantage() {
        let mut board = Board::new();
        board.remove_pieces(&[Pos::new(0, 1)]);

        assert!(evaluate(&board, Color::Light) > 0.0);
        assert!(evaluate(&board, Color::Dark) < 0.0);
    }

    #[test]
    fn test_king_outweighs_man() {
        let man = board("
            ..........
            ..........
            ..........
            ..........
            .....d....
            ..........
            ..........
            ..........
            ..........
            ..........
        ");
        let king = board("
            ..........
            ..........
            ..........
            ..........
            .....D....
            ..........
            ..........
            ..........
            ..........
            ..........
        ");

        assert!(evaluate(&king, Color::Dark) > evaluate(&man, Color::Dark) + 2.0);
    }

    #[test]
    fn test_single_king_terms() {
        // Dark king on (4,5): own half, inside the center, four destinations
        let board = board("
            ..........
            ..........
            ..........
            ..........
            .....D....
            ..........
            ..........
            ..........
            ..........
            ..........
        ");

        let tally = SideTally::collect(&board, Color::Dark);
        assert_eq!(tally.kings, 1);
        assert_eq!(tally.king_center, 1);
        assert_eq!(tally.king_opponent_half, 0);
        assert_eq!(tally.king_destinations, 4);
        assert_eq!(tally.advancement, 0);
        assert_eq!(tally.centrality, 10 - (1 + 1));

        let expected = EvalWeight::PIECE
            + EvalWeight::KING
            + EvalWeight::KING_ACTIVE
            + 8.0 * EvalWeight::CENTRALITY
            + EvalWeight::KING_CENTER
            + EvalWeight::MOBILITY
            + 4.0 * EvalWeight::KING_MOBILITY;
        assert!((evaluate(&board, Color::Dark) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_advancement_rewards_progress() {
        let home = SideTally::collect(&board_with(Pos::new(9, 4), Color::Light), Color::Light);
        let ahead = SideTally::collect(&board_with(Pos::new(5, 4), Color::Light), Color::Light);
        assert_eq!(home.advancement, 0);
        assert_eq!(home.back_row, 1);
        assert_eq!(ahead.advancement, 4);
        assert_eq!(ahead.back_row, 0);
    }

    fn board_with(pos: Pos, color: Color) -> Board {
        let mut board = Board::empty();
        board.place_piece(pos, color, false);
        board
    }

    #[test]
    fn test_centrality_extremes() {
        assert_eq!(centrality(Pos::new(4, 5)), 8);
        assert_eq!(centrality(Pos::new(5, 4)), 8);
        assert_eq!(centrality(Pos::new(0, 9)), -8);
        assert_eq!(centrality(Pos::new(9, 0)), -8);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = Board::new();
        let before = board;
        let _ = evaluate(&board, Color::Dark);
        assert_eq!(board, before);
    }
}
