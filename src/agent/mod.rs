//! Quarto agents
//!
//! An agent owns whatever session state it needs (search cache, RNG) and
//! implements the two-operation contract the transport exposes: pick the
//! opening piece, and complete a turn by placing the piece in hand and
//! choosing the piece handed to the opponent.

pub mod minimax;
pub mod random;
pub mod registry;

// Re-exports
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use registry::build_agent;

use crate::board::{Cell, GameState, Piece};
use crate::error::EngineError;

/// A completed turn: where the piece in hand was placed, and which piece is
/// handed to the opponent (`None` once the pool is exhausted).
pub type Turn = (Cell, Option<Piece>);

/// Contract exposed to transport and CLI callers.
pub trait QuartoAgent {
    /// Pick the piece handed to the opponent on the very first move.
    fn choose_initial_piece(&mut self) -> Piece;

    /// Place the current piece and choose the opponent's next piece.
    fn complete_turn(&mut self, game: &GameState) -> Result<Turn, EngineError>;

    /// Stable identifier reported by the health endpoint.
    fn identifier(&self) -> String;
}
