//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation
//!
//! The random source is injected, so a seeded engine replays the same game.

use chess_core::{legal_moves, Board, ChessError, ChessResult, Engine, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;


/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation; every legal move is equally likely.
#[derive(Debug, Clone)]
pub struct RandomEngine<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomEngine<StdRng> {
    /// Reproducible engine: the same seed picks the same moves.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> Engine for RandomEngine<R> {
    fn select_move(&mut self, board: &Board) -> ChessResult<Move> {
        let moves = legal_moves(board);
        let mv = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessError::NoLegalMove)?;
        debug!(%mv, choices = moves.len(), "random move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
