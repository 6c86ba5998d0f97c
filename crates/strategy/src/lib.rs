//! Move-selection strategies.
//!
//! Every strategy the game can use is a variant of [`Strategy`], so callers
//! pick one by [`StrategyKind`] and drive it through [`Engine`].

use std::fmt;
use std::str::FromStr;

use chess_core::{Board, ChessResult, Engine, Move};
use minimax_engine::{MinimaxConfig, MinimaxEngine};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use tracing::debug;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    #[default]
    Minimax,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Random => f.write_str("random"),
            StrategyKind::Minimax => f.write_str("minimax"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected random or minimax)")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" | "rand" => Ok(StrategyKind::Random),
            "minimax" | "mm" => Ok(StrategyKind::Minimax),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Strategy {
    Random(RandomEngine),
    Minimax(MinimaxEngine),
}

impl Strategy {
    /// Build a strategy of the given kind. `depth` only affects minimax and
    /// `seed` only affects random; without a seed the random engine draws
    /// from OS entropy.
    pub fn from_kind(kind: StrategyKind, depth: u8, seed: Option<u64>) -> Self {
        match kind {
            StrategyKind::Random => Self::random(seed),
            StrategyKind::Minimax => Self::minimax(MinimaxConfig::with_depth(depth)),
        }
    }

    pub fn random(seed: Option<u64>) -> Self {
        Strategy::Random(match seed {
            Some(seed) => RandomEngine::seeded(seed),
            None => RandomEngine::from_entropy(),
        })
    }

    pub fn minimax(config: MinimaxConfig) -> Self {
        Strategy::Minimax(MinimaxEngine::new(config))
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Random(_) => StrategyKind::Random,
            Strategy::Minimax(_) => StrategyKind::Minimax,
        }
    }
}

impl Engine for Strategy {
    fn select_move(&mut self, board: &Board) -> ChessResult<Move> {
        match self {
            Strategy::Random(engine) => engine.select_move(board),
            Strategy::Minimax(engine) => engine.select_move(board),
        }
    }

    fn name(&self) -> &str {
        match self {
            Strategy::Random(engine) => engine.name(),
            Strategy::Minimax(engine) => engine.name(),
        }
    }

    fn new_game(&mut self) {
        match self {
            Strategy::Random(engine) => engine.new_game(),
            Strategy::Minimax(engine) => engine.new_game(),
        }
    }
}

/// One-shot selection: build a strategy of `kind` and ask it for a move.
///
/// Fails with [`chess_core::ChessError::NoLegalMove`] when the side to move
/// has no legal moves.
pub fn select_move(board: &Board, kind: StrategyKind, depth: u8, seed: Option<u64>) -> ChessResult<Move> {
    let mut strategy = Strategy::from_kind(kind, depth, seed);
    let mv = strategy.select_move(board)?;
    debug!(%kind, %mv, "strategy selected move");
    Ok(mv)
}
