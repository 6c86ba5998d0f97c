pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod outcome;
pub mod perft;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{ChessError, ChessResult};
pub use game::Game;
pub use movegen::*;
pub use outcome::*;
pub use perft::{perft, perft_divide};
pub use types::*;
pub use zobrist::{ZOBRIST, position_key};

// =============================================================================
// Engine trait, implemented by every move-selection strategy
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns, positive = good for White
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Capability shared by all move-selection strategies.
pub trait Engine {
    /// Pick a move for the side to move.
    ///
    /// Fails with [`ChessError::NoLegalMove`] when the position has no legal
    /// moves; callers are expected to check [`outcome`] first.
    fn select_move(&mut self, board: &Board) -> ChessResult<Move>;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
