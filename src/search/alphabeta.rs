//! Minimax search with alpha-beta pruning and iterative deepening
//!
//! Every node owns its own copy of the board. Successor boards are value
//! copies with the move, promotion and captures already applied, so
//! sibling branches never observe each other's speculative state.
//!
//! # Features
//!
//! - Iterative deepening between a minimum and a maximum depth
//! - Optional time budget, checked only between completed depths
//! - Node counting for diagnostics
//! - Root children scored on a rayon pool with the `parallel` feature
//!
//! # Example
//!
//! ```
//! use checkers::board::{Board, Color};
//! use checkers::search::Searcher;
//!
//! let board = Board::new();
//! let mut searcher = Searcher::new(Color::Light);
//!
//! let result = searcher.search(&board, 1, 2);
//! assert!(result.board.is_some());
//! assert_eq!(result.depth, 2);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::rules::{all_legal_moves, winner};

/// Infinity score for alpha-beta bounds
pub const INF: f64 = f64::INFINITY;

/// Search result containing the chosen board and statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Board after the best move found, `None` if the side has no move
    pub board: Option<Board>,
    /// Score of that board from the searching side's perspective
    pub score: f64,
    /// Deepest depth completed
    pub depth: u8,
    /// Total nodes searched across all depths
    pub nodes: u64,
}

/// Every board reachable in one move by `color`.
///
/// One successor per (piece, destination) pair, in row-major piece order
/// and destination order. The input board is left untouched.
pub fn successors(board: &Board, color: Color) -> Vec<Board> {
    let mut boards = Vec::new();
    for (from, moves) in all_legal_moves(board, color) {
        for (to, captured) in moves {
            let mut next = *board;
            next.move_piece(from, to);
            next.remove_pieces(&captured);
            boards.push(next);
        }
    }
    boards
}

/// Alpha-beta searcher playing one color.
///
/// The maximizing side is always the searcher's own color; scores are
/// evaluated from its perspective.
pub struct Searcher {
    color: Color,
    nodes: u64,
    time_limit: Option<Duration>,
}

impl Searcher {
    /// Searcher without a time budget: every depth up to the maximum runs.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            nodes: 0,
            time_limit: None,
        }
    }

    /// Searcher that stops deepening once the next depth is not expected
    /// to finish within `time_limit`.
    #[must_use]
    pub fn with_time_limit(color: Color, time_limit: Duration) -> Self {
        Self {
            color,
            nodes: 0,
            time_limit: Some(time_limit),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Nodes visited since the last call to `search`
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Returns the score of `board` searched `depth` plies deep together
    /// with the child board that achieves it. At a leaf (depth 0 or a
    /// decided game) the board itself is returned with its static score.
    /// Among equally scored children the first one is kept.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Board) {
        self.nodes += 1;

        if depth == 0 || winner(board).is_some() {
            return (evaluate(board, self.color), *board);
        }

        let side = if maximizing {
            self.color
        } else {
            self.color.opponent()
        };
        let children = successors(board, side);
        if children.is_empty() {
            return (evaluate(board, self.color), *board);
        }

        let mut best_board = *board;
        if maximizing {
            let mut best = -INF;
            for child in children {
                let (score, _) = self.minimax(&child, depth - 1, false, alpha, beta);
                if score > best {
                    best = score;
                    best_board = child;
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_board)
        } else {
            let mut best = INF;
            for child in children {
                let (score, _) = self.minimax(&child, depth - 1, true, alpha, beta);
                if score < best {
                    best = score;
                    best_board = child;
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (best, best_board)
        }
    }

    /// Root-level search with full alpha-beta window.
    #[cfg(not(feature = "parallel"))]
    fn search_root(&mut self, board: &Board, depth: u8) -> Option<(f64, Board)> {
        let children = successors(board, self.color);
        self.nodes += 1;

        let mut alpha = -INF;
        let mut best: Option<(f64, Board)> = None;
        for child in children {
            let (score, _) = self.minimax(&child, depth - 1, false, alpha, INF);
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, child));
            }
            alpha = alpha.max(score);
        }
        best
    }

    /// Root-level search scoring every child on the rayon pool.
    ///
    /// Each child gets a full window, so its score is exact and the first
    /// maximum is the same board the sequential search picks.
    #[cfg(feature = "parallel")]
    fn search_root(&mut self, board: &Board, depth: u8) -> Option<(f64, Board)> {
        use rayon::prelude::*;

        let color = self.color;
        let scored: Vec<(f64, Board, u64)> = successors(board, color)
            .into_par_iter()
            .map(|child| {
                let mut worker = Searcher::new(color);
                let (score, _) = worker.minimax(&child, depth - 1, false, -INF, INF);
                (score, child, worker.nodes)
            })
            .collect();
        self.nodes += 1;

        let mut best: Option<(f64, Board)> = None;
        for (score, child, nodes) in scored {
            self.nodes += nodes;
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, child));
            }
        }
        best
    }

    /// Iterative deepening from `min_depth` up to `max_depth`.
    ///
    /// The minimum depth always completes. With a time limit, a further
    /// depth is started only if its estimated cost fits in what remains of
    /// the budget; a running depth is never interrupted.
    #[must_use]
    pub fn search(&mut self, board: &Board, min_depth: u8, max_depth: u8) -> SearchResult {
        let min_depth = min_depth.max(1);
        let max_depth = max_depth.max(min_depth);
        self.nodes = 0;

        let mut best_result = SearchResult {
            board: None,
            score: 0.0,
            depth: 0,
            nodes: 0,
        };

        let search_start = Instant::now();
        let mut prev_depth_time = Duration::ZERO;

        for depth in min_depth..=max_depth {
            let depth_start = Instant::now();
            let Some((score, best)) = self.search_root(board, depth) else {
                break;
            };

            best_result.board = Some(best);
            best_result.score = score;
            best_result.depth = depth;

            let depth_time = depth_start.elapsed();
            debug!(
                color = %self.color,
                depth,
                score,
                nodes = self.nodes,
                elapsed_ms = depth_time.as_millis() as u64,
                "search depth complete"
            );

            let Some(limit) = self.time_limit else {
                continue;
            };
            let remaining = limit.saturating_sub(search_start.elapsed());
            let estimated_next = if prev_depth_time.as_millis() > 0 && depth_time.as_millis() > 0 {
                let bf = depth_time.as_millis() as f64 / prev_depth_time.as_millis().max(1) as f64;
                let bf = bf.clamp(1.5, 8.0);
                Duration::from_millis((depth_time.as_millis() as f64 * bf) as u64)
            } else {
                depth_time * 3
            };

            prev_depth_time = depth_time;

            if remaining.is_zero() || estimated_next > remaining {
                break;
            }
        }

        best_result.nodes = self.nodes;
        best_result
    }
}
