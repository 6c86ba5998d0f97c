//! Minimax Chess Engine
//!
//! Fixed-depth minimax with optional alpha-beta pruning over a static
//! evaluation of material, mobility, capture potential and center control.
//!
//! Scores are White-positive centipawns throughout: White maximises and Black
//! minimises. Draw rules are not applied inside the tree.

mod eval;
mod search;

use chess_core::{Board, ChessError, ChessResult, Color, Engine, Move, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use eval::{evaluate, evaluate_with, material, piece_value, EvalWeights, MAX_EVAL, PIECE_VALUES};
pub use search::{better_for, terminal_score, ScoredMove, MATE_SCORE};

use search::Searcher;

#[cfg(test)]
mod lib_tests;

pub const DEFAULT_DEPTH: u8 = 3;

/// Search settings, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Plies searched below the root; values below 1 are treated as 1.
    pub depth: u8,
    /// Prune with alpha-beta. Never changes the chosen move.
    pub alpha_beta: bool,
    pub weights: EvalWeights,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
            weights: EvalWeights::default(),
        }
    }
}

impl MinimaxConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// Minimax engine.
///
/// This engine uses:
/// - Plain minimax, White maximising and Black minimising
/// - Optional alpha-beta pruning
/// - Mate scores that prefer the shortest mate
/// - Ties broken by move generation order
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: MinimaxConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(config: MinimaxConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(MinimaxConfig::with_depth(depth))
    }

    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn depth(&self) -> u8 {
        self.config.depth.max(1)
    }

    /// Search `board` to the configured depth.
    ///
    /// With no legal moves, `best_move` is `None` and `score` is the mate or
    /// stalemate score of the root.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let depth = self.depth();
        let mut searcher = Searcher::new(&self.config.weights, self.config.alpha_beta);
        let best = searcher.best_move(board, depth);
        self.nodes = searcher.nodes;

        let score = match best {
            Some(b) => b.score,
            None => terminal_score(board, 0),
        };
        debug!(
            depth,
            nodes = self.nodes,
            score,
            best = ?best.map(|b| b.mv.to_string()),
            "minimax search finished"
        );

        SearchResult {
            best_move: best.map(|b| b.mv),
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Every legal move with its searched score, best first for the side to
    /// move. Equal scores keep generation order.
    pub fn rank_moves(&mut self, board: &Board) -> Vec<ScoredMove> {
        let depth = self.depth();
        let mut searcher = Searcher::new(&self.config.weights, self.config.alpha_beta);
        let mut ranked = searcher.score_all(board, depth);
        self.nodes = searcher.nodes;

        let side = board.side_to_move;
        ranked.sort_by_key(|s| match side {
            Color::White => -s.score,
            Color::Black => s.score,
        });
        for scored in &ranked {
            trace!(%scored, "ranked move");
        }
        ranked
    }
}

impl Engine for MinimaxEngine {
    fn select_move(&mut self, board: &Board) -> ChessResult<Move> {
        self.search(board).best_move.ok_or(ChessError::NoLegalMove)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
