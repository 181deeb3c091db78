//! Uniform random agent, mainly useful as a sparring baseline

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::board::{GameState, Piece};
use crate::error::EngineError;
use crate::rules::{get_available_cells, get_available_pieces};

use super::{QuartoAgent, Turn};

/// Agent that places on a random free cell and hands over a random piece.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl QuartoAgent for RandomAgent {
    fn choose_initial_piece(&mut self) -> Piece {
        Piece::from_index(self.rng.gen_range(0..Piece::COUNT as u8))
    }

    fn complete_turn(&mut self, game: &GameState) -> Result<Turn, EngineError> {
        let cell = get_available_cells(game)
            .iter()
            .choose(&mut self.rng)
            .ok_or(EngineError::NoMoveFound)?;
        let piece = get_available_pieces(game).iter().choose(&mut self.rng);
        Ok((cell, piece))
    }

    fn identifier(&self) -> String {
        format!("random:v{}", env!("CARGO_PKG_VERSION"))
    }
}
