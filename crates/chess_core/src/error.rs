//! Error types for the rules engine.
//!
//! Everything here is recoverable at the call site: a front end reports the
//! error and re-prompts. Broken board invariants (a missing king) are bugs and
//! panic instead.

use thiserror::Error;

use crate::types::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not in the legal-move set of the board it was applied to.
    #[error("illegal move: {mv}")]
    IllegalMove { mv: Move },

    /// A strategy was asked to move in a position with no legal moves.
    #[error("no legal move available")]
    NoLegalMove,

    /// Coordinates outside the 8x8 board.
    #[error("invalid square: file {file}, rank {rank} (must be 0-7)")]
    InvalidSquare { file: i8, rank: i8 },

    #[error("invalid FEN: {reason}")]
    InvalidFen { reason: String },
}

impl ChessError {
    pub(crate) fn fen(reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            reason: reason.into(),
        }
    }
}

/// Result alias for rules-engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
