//! Position evaluation and game-phase classification

pub mod heuristic;
pub mod phase;

// Re-exports
pub use heuristic::{evaluate, evaluate_inverted, LineScore};
pub use phase::{classify_phase, GamePhase};

use crate::board::Board;

/// Evaluation function plugged into the search engine
pub type EvalFn = fn(&Board) -> i32;
