//! Turn controller
//!
//! Drives one game: whose turn it is, piece selection, forced capture
//! continuation, the computer's moves, terminal detection and undo.
//! Rendering and input devices live elsewhere; this type only sees
//! board coordinates.

use tracing::info;

use crate::board::{Board, Color, Pos};
use crate::error::{GameError, GameResult};
use crate::rules::{
    capture_moves, execute_move, piece_moves, winner, AppliedMove, GameOutcome, MoveMap,
};
use crate::search::successors;

/// Consecutive plies without a capture after which the game is drawn
pub const QUIET_PLY_LIMIT: u32 = 80;

/// Where the current turn stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the side to move to pick a piece
    AwaitingSelection,
    /// A piece is selected; `moves` holds its destinations.
    /// `continuing` is set during a capture chain, when only captures
    /// with this piece are allowed.
    AwaitingDestination {
        piece: Pos,
        moves: MoveMap,
        continuing: bool,
    },
    GameOver,
}

/// What a click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected
    Selected { piece: Pos },
    /// A move was applied
    Moved(AppliedMove),
}

/// Position at the start of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    turn: Color,
    quiet_plies: u32,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    phase: TurnPhase,
    outcome: Option<GameOutcome>,
    quiet_plies: u32,
    last_move: Option<(Pos, Pos)>,
    turn_start: Snapshot,
    history: Vec<Snapshot>,
}

/// Fresh game: standard setup, Light to move
pub fn new_game() -> GameState {
    GameState::new()
}

impl GameState {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::Light)
    }

    /// Game starting from an arbitrary position
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut state = Self {
            board,
            turn,
            phase: TurnPhase::AwaitingSelection,
            outcome: None,
            quiet_plies: 0,
            last_move: None,
            turn_start: Snapshot {
                board,
                turn,
                quiet_plies: 0,
            },
            history: Vec::new(),
        };
        state.check_game_over();
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn quiet_plies(&self) -> u32 {
        self.quiet_plies
    }

    /// Last move's origin and destination, if known
    #[inline]
    pub fn last_move(&self) -> Option<(Pos, Pos)> {
        self.last_move
    }

    /// Currently selected piece
    pub fn selected(&self) -> Option<Pos> {
        match &self.phase {
            TurnPhase::AwaitingDestination { piece, .. } => Some(*piece),
            _ => None,
        }
    }

    /// Destinations of the selected piece
    pub fn destinations(&self) -> Option<&MoveMap> {
        match &self.phase {
            TurnPhase::AwaitingDestination { moves, .. } => Some(moves),
            _ => None,
        }
    }

    /// True while a capture chain must be finished
    pub fn is_continuing(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::AwaitingDestination { continuing: true, .. }
        )
    }

    /// Number of completed turns that can be undone
    #[inline]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Handle a click on a cell.
    ///
    /// With a piece selected, a click on one of its destinations plays that
    /// move. Any other click clears the selection and is tried as a new
    /// selection, except during a capture chain, where it is rejected.
    pub fn click(&mut self, row: i32, col: i32) -> GameResult<ClickOutcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let pos = Pos::checked(row, col)?;

        if let TurnPhase::AwaitingDestination {
            piece,
            moves,
            continuing,
        } = &self.phase
        {
            let (piece, continuing) = (*piece, *continuing);
            match moves.get(&pos).cloned() {
                Some(captured) => {
                    return Ok(ClickOutcome::Moved(self.commit(piece, pos, captured)));
                }
                None if continuing => return Err(GameError::MustContinue { piece }),
                None => self.phase = TurnPhase::AwaitingSelection,
            }
        }

        self.select(pos)
    }

    /// Select a piece of the side to move
    pub fn select(&mut self, pos: Pos) -> GameResult<ClickOutcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if let TurnPhase::AwaitingDestination {
            piece,
            continuing: true,
            ..
        } = self.phase
        {
            return Err(GameError::MustContinue { piece });
        }

        // A rejected selection always drops the previous one
        self.phase = TurnPhase::AwaitingSelection;
        let piece = self.board.get(pos).ok_or(GameError::NoPiece { pos })?;
        if piece.color != self.turn {
            return Err(GameError::WrongTurn {
                expected: self.turn,
            });
        }

        self.phase = TurnPhase::AwaitingDestination {
            piece: pos,
            moves: piece_moves(&self.board, piece),
            continuing: false,
        };
        Ok(ClickOutcome::Selected { piece: pos })
    }

    /// Drop the current selection. A capture chain in progress is kept.
    pub fn clear_selection(&mut self) {
        if let TurnPhase::AwaitingDestination {
            continuing: false, ..
        } = self.phase
        {
            self.phase = TurnPhase::AwaitingSelection;
        }
    }

    /// Play `from -> to` for the side to move without going through the
    /// selection. The board is untouched on error.
    pub fn play(&mut self, from: Pos, to: Pos) -> GameResult<AppliedMove> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let moves = match &self.phase {
            TurnPhase::AwaitingDestination {
                piece,
                moves,
                continuing: true,
            } => {
                if *piece != from {
                    return Err(GameError::MustContinue { piece: *piece });
                }
                moves.clone()
            }
            _ => {
                let piece = self.board.get(from).ok_or(GameError::NoPiece { pos: from })?;
                if piece.color != self.turn {
                    return Err(GameError::WrongTurn {
                        expected: self.turn,
                    });
                }
                piece_moves(&self.board, piece)
            }
        };

        let captured = moves
            .get(&to)
            .cloned()
            .ok_or(GameError::InvalidMove { from, to })?;
        Ok(self.commit(from, to, captured))
    }

    /// Take over the board the computer chose for the side to move.
    ///
    /// The board must be one full move (capture chain included) away from
    /// the current position.
    pub fn adopt_computer_board(&mut self, board: Board) -> GameResult<()> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if let TurnPhase::AwaitingDestination {
            piece,
            continuing: true,
            ..
        } = self.phase
        {
            return Err(GameError::MustContinue { piece });
        }
        if !successors(&self.board, self.turn).contains(&board) {
            return Err(GameError::UnreachableBoard { color: self.turn });
        }

        self.last_move = moved_piece(&self.board, &board, self.turn);
        self.board = board;
        self.finish_turn();
        Ok(())
    }

    /// The side to move has no move to make: the opponent wins.
    pub fn concede_no_move(&mut self) {
        if self.is_over() {
            return;
        }
        self.end_game(GameOutcome::Win(self.turn.opponent()));
    }

    /// Restore the position at the start of the previous turn.
    ///
    /// A capture chain in progress is rolled back to the start of the
    /// current turn instead. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.board != self.turn_start.board {
            self.restore(self.turn_start);
            return true;
        }
        match self.history.pop() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.turn = snapshot.turn;
        self.quiet_plies = snapshot.quiet_plies;
        self.turn_start = snapshot;
        self.phase = TurnPhase::AwaitingSelection;
        self.outcome = None;
        self.last_move = None;
    }

    /// Apply a move taken from the legal-move map and advance the turn,
    /// unless the piece has to keep capturing.
    fn commit(&mut self, from: Pos, to: Pos, captured: Vec<Pos>) -> AppliedMove {
        let applied = execute_move(&mut self.board, from, to, captured);
        self.last_move = Some((from, to));

        if applied.must_continue {
            // A man crowned on this jump never continues, so the piece's
            // current status is the one it started the chain with
            let king = !applied.promoted && self.board.get(to).is_some_and(|p| p.king);
            self.phase = TurnPhase::AwaitingDestination {
                piece: to,
                moves: capture_moves(&self.board, to, self.turn, king),
                continuing: true,
            };
        } else {
            self.finish_turn();
        }
        applied
    }

    fn finish_turn(&mut self) {
        if self.board.total_pieces() < self.turn_start.board.total_pieces() {
            self.quiet_plies = 0;
        } else {
            self.quiet_plies += 1;
        }

        self.history.push(self.turn_start);
        self.turn = self.turn.opponent();
        self.turn_start = Snapshot {
            board: self.board,
            turn: self.turn,
            quiet_plies: self.quiet_plies,
        };
        self.phase = TurnPhase::AwaitingSelection;
        self.check_game_over();
    }

    fn check_game_over(&mut self) {
        if let Some(color) = winner(&self.board) {
            self.end_game(GameOutcome::Win(color));
        } else if self.quiet_plies >= QUIET_PLY_LIMIT {
            self.end_game(GameOutcome::Draw);
        }
    }

    fn end_game(&mut self, outcome: GameOutcome) {
        info!(
            %outcome,
            moves = self.history.len(),
            dark_left = self.board.pieces_left(Color::Dark),
            light_left = self.board.pieces_left(Color::Light),
            "game over"
        );
        self.outcome = Some(outcome);
        self.phase = TurnPhase::GameOver;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Origin and destination of the piece of `color` that moved between two
/// boards
fn moved_piece(before: &Board, after: &Board, color: Color) -> Option<(Pos, Pos)> {
    let from = before
        .pieces(color)
        .map(|p| p.pos)
        .find(|pos| after.color_at(*pos) != Some(color))?;
    let to = after
        .pieces(color)
        .map(|p| p.pos)
        .find(|pos| before.color_at(*pos) != Some(color))?;
    Some((from, to))
}
