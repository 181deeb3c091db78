//! Minimax agent: phase classification, depth selection, search
//!
//! The agent classifies the position into a game phase, picks a search
//! depth from its configured per-phase limits, and runs the alpha-beta
//! search with a full window. The memo cache lives for the lifetime of the
//! agent instance and is never evicted.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{GameState, Piece};
use crate::error::EngineError;
use crate::eval::{classify_phase, evaluate, evaluate_inverted, EvalFn, GamePhase};
use crate::rules::{get_available_cells, get_available_pieces};
use crate::search::{search, SearchCache};

use super::{QuartoAgent, Turn};

/// Alpha-beta bounds for a root search
const FULL_WINDOW: (i32, i32) = (i32::MIN + 1, i32::MAX);

/// Search-driven agent with phase-adaptive depth control.
pub struct MinimaxAgent {
    /// Search depth per game phase (early, mid, late)
    depth_limits: (u8, u8, u8),
    cache: SearchCache,
    rng: StdRng,
}

impl MinimaxAgent {
    /// Create an agent with the default depth limits `(2, 3, 5)`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config((2, 3, 5), None)
    }

    /// Create an agent with explicit depth limits and an optional RNG seed
    /// for reproducible opening choices.
    #[must_use]
    pub fn with_config(depth_limits: (u8, u8, u8), seed: Option<u64>) -> Self {
        info!("initializing minimax agent with depth limits {depth_limits:?}");
        Self {
            depth_limits,
            cache: SearchCache::new(),
            rng: seeded_rng(seed),
        }
    }

    fn depth_limit(&self, phase: GamePhase) -> u8 {
        match phase {
            GamePhase::Early => self.depth_limits.0,
            GamePhase::Mid => self.depth_limits.1,
            GamePhase::Late => self.depth_limits.2,
        }
    }
}

/// Evaluation function for a phase.
///
/// During the early game the evaluator's output is negated: the agent
/// deliberately avoids building up its own heuristic signal while the
/// position is still wide open.
pub(crate) fn phase_evaluator(phase: GamePhase) -> EvalFn {
    match phase {
        GamePhase::Early => evaluate_inverted,
        GamePhase::Mid | GamePhase::Late => evaluate,
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl QuartoAgent for MinimaxAgent {
    /// Uniform random choice over all 16 pieces. The opening position is
    /// maximally symmetric, so search would not discriminate anyway.
    fn choose_initial_piece(&mut self) -> Piece {
        Piece::from_index(self.rng.gen_range(0..Piece::COUNT as u8))
    }

    fn complete_turn(&mut self, game: &GameState) -> Result<Turn, EngineError> {
        let phase = classify_phase(game);
        debug!(
            "game phase {:?} ({} of 16 cells free)",
            phase,
            get_available_cells(game).len()
        );

        let depth_limit = self.depth_limit(phase);
        let eval_fn = phase_evaluator(phase);

        let mut board = game.board.clone();
        let (alpha, beta) = FULL_WINDOW;
        let result = search(
            &mut board,
            get_available_pieces(game),
            get_available_cells(game),
            game.current_piece,
            true,
            depth_limit,
            &mut self.cache,
            eval_fn,
            alpha,
            beta,
        );
        debug!(
            "search finished: score {}, cell {:?}, piece {:?}, {} cached positions",
            result.score,
            result.cell,
            result.piece,
            self.cache.len()
        );

        let cell = result.cell.ok_or(EngineError::NoMoveFound)?;
        Ok((cell, result.piece))
    }

    fn identifier(&self) -> String {
        format!("minimax:v{}", env!("CARGO_PKG_VERSION"))
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}
