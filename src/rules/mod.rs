//! Rules of 10x10 checkers
//!
//! - Move generation (steps, capture chains, kings)
//! - Move application (promotion, capture removal, forced continuation)
//! - Terminal conditions

pub mod capture;
pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use capture::{apply_move, execute_move, AppliedMove};
pub use moves::{
    all_legal_moves, capture_moves, has_legal_move, legal_moves, movable_piece_count,
    piece_moves, LegalMoves, MoveMap,
};
pub use win::{is_game_over, winner, GameOutcome};
