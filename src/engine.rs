//! Main AI engine
//!
//! Wraps the alpha-beta searcher with a depth policy and a time budget.
//! The maximum depth grows as pieces come off the board, since the
//! branching factor shrinks with them.
//!
//! # Example
//!
//! ```
//! use checkers::{AIEngine, Board, Color};
//!
//! let engine = AIEngine::with_config(1, 500);
//! let board = Board::new();
//!
//! let result = engine.choose_move_with_stats(&board, Color::Light);
//! assert!(result.board.is_some());
//! println!("Score: {:.2}, depth {}", result.score, result.depth);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use tracing::info;

use crate::board::{Board, Color};
use crate::search::{SearchResult, Searcher};

/// Maximum search depth as a function of the pieces left on the board
pub type DepthPolicy = fn(u32) -> u8;

/// Depth 3 with 15 or more pieces left, 4 with 10 or more, 5 with 6 or
/// more, otherwise 6.
///
/// ```
/// use checkers::engine::reference_depth_policy;
///
/// assert_eq!(reference_depth_policy(40), 3);
/// assert_eq!(reference_depth_policy(12), 4);
/// assert_eq!(reference_depth_policy(6), 5);
/// assert_eq!(reference_depth_policy(2), 6);
/// ```
pub fn reference_depth_policy(total_pieces: u32) -> u8 {
    match total_pieces {
        15.. => 3,
        10..=14 => 4,
        6..=9 => 5,
        _ => 6,
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Board after the computer's full move, `None` if it cannot move
    pub board: Option<Board>,
    /// Evaluation score from the mover's perspective
    pub score: f64,
    /// Deepest depth completed
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            board: result.board,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Computer player.
///
/// # Configuration
///
/// - Minimum depth, always searched in full
/// - Depth policy giving the maximum depth
/// - Time limit deciding whether one more depth is started
#[derive(Debug, Clone, Copy)]
pub struct AIEngine {
    min_depth: u8,
    depth_policy: DepthPolicy,
    time_limit: Duration,
}

impl AIEngine {
    /// Engine with default settings: minimum depth 3, the reference depth
    /// policy and a 2 second budget.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(3, 2000)
    }

    /// Engine with custom minimum depth and time limit.
    ///
    /// ```
    /// use checkers::AIEngine;
    ///
    /// let engine = AIEngine::with_config(2, 1000);
    /// assert_eq!(engine.min_depth(), 2);
    /// ```
    #[must_use]
    pub fn with_config(min_depth: u8, time_limit_ms: u64) -> Self {
        Self {
            min_depth: min_depth.max(1),
            depth_policy: reference_depth_policy,
            time_limit: Duration::from_millis(time_limit_ms),
        }
    }

    /// Replace the depth policy
    #[must_use]
    pub fn with_depth_policy(mut self, depth_policy: DepthPolicy) -> Self {
        self.depth_policy = depth_policy;
        self
    }

    #[inline]
    pub fn min_depth(&self) -> u8 {
        self.min_depth
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Maximum depth for this board under the configured policy
    pub fn max_depth(&self, board: &Board) -> u8 {
        (self.depth_policy)(board.total_pieces()).max(self.min_depth)
    }

    /// Board after the best move for `color`, or `None` if it has no move.
    #[must_use]
    pub fn choose_move(&self, board: &Board, color: Color) -> Option<Board> {
        self.choose_move_with_stats(board, color).board
    }

    /// Best move for `color` with search statistics.
    #[must_use]
    pub fn choose_move_with_stats(&self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();
        let max_depth = self.max_depth(board);

        let mut searcher = Searcher::with_time_limit(color, self.time_limit);
        let result = searcher.search(board, self.min_depth, max_depth);
        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        if result.board.is_some() {
            info!(
                %color,
                score = result.score,
                depth = result.depth,
                nodes = result.nodes,
                time_ms = result.time_ms,
                "computer move chosen"
            );
        } else {
            info!(%color, "computer has no legal move");
        }
        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Search between `min_depth` and `max_depth` without a time budget and
/// return the board after `color`'s full move, captures included.
///
/// Returns `None` when `color` has no legal move.
///
/// ```
/// use checkers::{choose_computer_move, Board, Color};
///
/// let board = Board::new();
/// let next = choose_computer_move(&board, Color::Light, 1, 2).unwrap();
/// assert_eq!(next.total_pieces(), 40);
/// ```
#[must_use]
pub fn choose_computer_move(
    board: &Board,
    color: Color,
    min_depth: u8,
    max_depth: u8,
) -> Option<Board> {
    Searcher::new(color).search(board, min_depth, max_depth).board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.min_depth(), 3);
        assert_eq!(engine.time_limit(), Duration::from_millis(2000));
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(0, 100);
        assert_eq!(engine.min_depth(), 1);

        let engine = AIEngine::with_config(5, 100);
        // The policy says 3 at the start, but the minimum wins
        assert_eq!(engine.max_depth(&Board::new()), 5);
    }

    #[test]
    fn test_reference_depth_policy_boundaries() {
        assert_eq!(reference_depth_policy(15), 3);
        assert_eq!(reference_depth_policy(14), 4);
        assert_eq!(reference_depth_policy(10), 4);
        assert_eq!(reference_depth_policy(9), 5);
        assert_eq!(reference_depth_policy(6), 5);
        assert_eq!(reference_depth_policy(5), 6);
        assert_eq!(reference_depth_policy(0), 6);
    }

    #[test]
    fn test_custom_depth_policy() {
        let engine = AIEngine::with_config(1, 1000).with_depth_policy(|_| 2);
        assert_eq!(engine.max_depth(&Board::new()), 2);

        let result = engine.choose_move_with_stats(&Board::new(), Color::Dark);
        assert!(result.board.is_some());
        assert!(result.depth >= 1 && result.depth <= 2);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_no_move() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(9, 0), Color::Dark, false);
        board.place_piece(Pos::new(3, 4), Color::Light, false);

        let engine = AIEngine::with_config(1, 100);
        assert_eq!(engine.choose_move(&board, Color::Dark), None);
        assert_eq!(choose_computer_move(&board, Color::Dark, 1, 3), None);
    }

    #[test]
    fn test_computer_takes_whole_chain() {
        let board: Board = "
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
        "
        .parse()
        .unwrap();

        let next = choose_computer_move(&board, Color::Light, 1, 1).unwrap();
        assert_eq!(next.pieces_left(Color::Dark), 0);
        assert_eq!(next.color_at(Pos::new(1, 4)), Some(Color::Light));
    }

    #[test]
    fn test_engine_time_reasonable() {
        let engine = AIEngine::with_config(1, 200);
        let result = engine.choose_move_with_stats(&Board::new(), Color::Light);
        assert!(result.board.is_some());
        assert!(result.depth >= 1);
    }
}
