//! Search module for the checkers AI
//!
//! Contains:
//! - Successor generation over value-copied boards
//! - Minimax with alpha-beta pruning and iterative deepening

pub mod alphabeta;

pub use alphabeta::{successors, SearchResult, Searcher, INF};
