//! Position evaluation
//!
//! - [`heuristic`]: static evaluation of a board for one side
//! - [`weights`]: the weight table behind every term

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::EvalWeight;
