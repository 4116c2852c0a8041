//! Error types for the rules engine
//!
//! Every rejection is local and recoverable: a rejected request never
//! mutates the board, and the caller decides whether to re-prompt.

use crate::board::{Color, Pos};

/// Errors that can occur when driving a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Cell outside the 10x10 grid
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// No piece on the selected square
    #[error("no piece at {pos}")]
    NoPiece { pos: Pos },

    /// Selected piece belongs to the side not on move
    #[error("it is {expected}'s turn")]
    WrongTurn { expected: Color },

    /// Destination absent from the piece's legal moves
    #[error("invalid move from {from} to {to}")]
    InvalidMove { from: Pos, to: Pos },

    /// A capture chain is in progress and must be finished with this piece
    #[error("the capture chain must be continued with the piece at {piece}")]
    MustContinue { piece: Pos },

    /// Board handed over by the computer is not one move away
    #[error("the board is not reachable in one move by {color}")]
    UnreachableBoard { color: Color },

    /// The game has already ended
    #[error("the game is over")]
    GameOver,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors from parsing a board diagram
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 10 rows, found {found}")]
    RowCount { found: usize },

    #[error("row {row} has {found} cells, expected 10")]
    RowLength { row: usize, found: usize },

    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    #[error("piece on non-playable square ({row}, {col})")]
    UnplayableSquare { row: usize, col: usize },
}
