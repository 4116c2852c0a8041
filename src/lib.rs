//! Checkers engine with an alpha-beta AI
//!
//! Rules engine and computer player for checkers on a 10x10 board:
//! - 20 men per side on the dark squares of the first four rows
//! - Men move and capture diagonally forward; kings in all four directions
//! - Multi-jump capture chains, finished with the same piece
//! - A side with no pieces or no legal move loses
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move generation, move application and terminal conditions
//! - [`eval`]: Position evaluation
//! - [`search`]: Minimax with alpha-beta pruning and iterative deepening
//! - [`engine`]: Computer player with depth policy and time budget
//! - [`game`]: Turn controller for an interactive game
//! - [`ui`]: egui front end used by the `checkers` binary
//!
//! # Quick Start
//!
//! ```
//! use checkers::{AIEngine, Color, GameState, Pos};
//!
//! let mut game = GameState::new();
//! let engine = AIEngine::with_config(1, 500);
//!
//! // Light (the human) moves first
//! game.play(Pos::new(6, 1), Pos::new(5, 0)).unwrap();
//!
//! // Dark answers
//! if let Some(board) = engine.choose_move(game.board(), Color::Dark) {
//!     game.adopt_computer_board(board).unwrap();
//! }
//! assert_eq!(game.turn(), Color::Light);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Piece, Pos, BOARD_SIZE};
pub use engine::{choose_computer_move, reference_depth_policy, AIEngine, DepthPolicy, MoveResult};
pub use error::{BoardParseError, GameError, GameResult};
pub use eval::evaluate;
pub use game::{new_game, ClickOutcome, GameState, TurnPhase, QUIET_PLY_LIMIT};
pub use rules::{all_legal_moves, apply_move, legal_moves, winner, AppliedMove, GameOutcome};
