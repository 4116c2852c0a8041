//! Legal move generation
//!
//! Men step and jump along their two forward diagonals; kings use all four.
//! A jump takes the adjacent enemy piece when the cell right behind it is
//! empty, and the walk continues from the landing cell for as long as
//! further jumps exist. Every landing cell along a chain is a legal
//! destination of its own, mapped to the full list of pieces taken to
//! reach it. The moving piece leaves its square on the first jump, so a
//! king's chain may pass through or end on the square it started from.

use std::collections::BTreeMap;

use crate::board::{Board, Color, Piece, Pos};

/// Destination -> pieces captured on the way there (empty for a step).
pub type MoveMap = BTreeMap<Pos, Vec<Pos>>;

/// Piece square -> that piece's moves. Pieces without moves are omitted.
pub type LegalMoves = BTreeMap<Pos, MoveMap>;

/// Diagonal steps toward row 0 first, then toward row 9
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Directions a piece may travel in
fn directions(color: Color, king: bool) -> impl Iterator<Item = (i8, i8)> {
    let forward = color.forward();
    DIAGONALS
        .into_iter()
        .filter(move |&(dr, _)| king || dr == forward)
}

/// Legal moves for the piece standing on `pos` (empty if the cell is empty).
pub fn legal_moves(board: &Board, pos: Pos) -> MoveMap {
    match board.get(pos) {
        Some(piece) => piece_moves(board, piece),
        None => MoveMap::new(),
    }
}

/// Legal moves for a piece: single steps plus every capture chain.
pub fn piece_moves(board: &Board, piece: Piece) -> MoveMap {
    let mut moves = MoveMap::new();

    // Chains are walked with the piece already off its square, the same
    // board a turn sees when it is played one jump at a time
    let mut lifted = *board;
    lifted.remove_pieces(&[piece.pos]);

    for (dr, dc) in directions(piece.color, piece.king) {
        let Some(next) = piece.pos.offset(dr, dc) else {
            continue;
        };
        match lifted.color_at(next) {
            None => {
                moves.insert(next, Vec::new());
            }
            Some(color) if color == piece.color => {}
            Some(_) => {
                moves.extend(jump_over(&lifted, piece.color, piece.king, next, (dr, dc), &[]));
            }
        }
    }

    moves
}

/// Capture-only destinations for a piece of `color` on `pos`, moving with
/// the given king status.
///
/// Used to decide whether a capture chain continues after a landing; the
/// king status passed in is the one the piece had when the turn began.
pub fn capture_moves(board: &Board, pos: Pos, color: Color, king: bool) -> MoveMap {
    jumps_from(board, color, king, pos, &[])
}

/// Every further capture reachable from `from`, given the pieces already
/// taken on the way there.
fn jumps_from(board: &Board, color: Color, king: bool, from: Pos, captured: &[Pos]) -> MoveMap {
    let mut moves = MoveMap::new();

    for (dr, dc) in directions(color, king) {
        let Some(next) = from.offset(dr, dc) else {
            continue;
        };
        match board.color_at(next) {
            Some(other) if other != color && !captured.contains(&next) => {
                moves.extend(jump_over(board, color, king, next, (dr, dc), captured));
            }
            _ => {}
        }
    }

    moves
}

/// Jump the enemy piece on `enemy` along `dir`, recording the landing cell
/// and everything reachable from it. Empty if the landing is blocked.
fn jump_over(
    board: &Board,
    color: Color,
    king: bool,
    enemy: Pos,
    (dr, dc): (i8, i8),
    captured: &[Pos],
) -> MoveMap {
    let mut moves = MoveMap::new();
    let Some(landing) = enemy.offset(dr, dc) else {
        return moves;
    };
    if !board.is_empty(landing) {
        return moves;
    }

    let mut chain = captured.to_vec();
    chain.push(enemy);

    // Longer chains reaching the same cell later overwrite this entry
    moves.insert(landing, chain.clone());
    moves.extend(jumps_from(board, color, king, landing, &chain));
    moves
}

/// Moves for every piece of `color` that has at least one.
pub fn all_legal_moves(board: &Board, color: Color) -> LegalMoves {
    board
        .pieces(color)
        .filter_map(|piece| {
            let moves = piece_moves(board, piece);
            (!moves.is_empty()).then_some((piece.pos, moves))
        })
        .collect()
}

/// True if any piece of `color` can move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|piece| !piece_moves(board, piece).is_empty())
}

/// Number of pieces of `color` with at least one legal move.
pub fn movable_piece_count(board: &Board, color: Color) -> u32 {
    board
        .pieces(color)
        .filter(|piece| !piece_moves(board, *piece).is_empty())
        .count() as u32
}
