//! Classifying a position: still playing, check, or game over.

use std::fmt;

use crate::board::Board;
use crate::movegen::has_legal_move;
use crate::types::Color;

/// Which drawing rule ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawRule {
    /// 100 halfmoves without a capture or pawn move.
    FiftyMove,
    /// Same position (placement, side, rights, en-passant file) three times.
    ThreefoldRepetition,
    InsufficientMaterial,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    /// The given side is to move and in check, with legal replies.
    Check(Color),
    /// The given side has won.
    Checkmate(Color),
    Stalemate,
    DrawByRule(DrawRule),
}

impl GameOutcome {
    /// True for checkmate, stalemate and rule draws.
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameOutcome::Checkmate(_) | GameOutcome::Stalemate | GameOutcome::DrawByRule(_)
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => f.write_str("in progress"),
            GameOutcome::Check(c) => write!(f, "{c} is in check"),
            GameOutcome::Checkmate(c) => write!(f, "checkmate, {c} wins"),
            GameOutcome::Stalemate => f.write_str("stalemate"),
            GameOutcome::DrawByRule(DrawRule::FiftyMove) => f.write_str("draw by fifty-move rule"),
            GameOutcome::DrawByRule(DrawRule::ThreefoldRepetition) => {
                f.write_str("draw by threefold repetition")
            }
            GameOutcome::DrawByRule(DrawRule::InsufficientMaterial) => {
                f.write_str("draw by insufficient material")
            }
        }
    }
}

/// Classify `board` from the side to move's point of view.
///
/// Checkmate and stalemate are decided first; a mating move played on the
/// hundredth halfmove still wins. Threefold repetition needs the game's
/// history and is reported by [`crate::Game::outcome`].
pub fn outcome(board: &Board) -> GameOutcome {
    let us = board.side_to_move;
    let in_check = board.in_check(us);

    if !has_legal_move(board) {
        return if in_check {
            GameOutcome::Checkmate(us.other())
        } else {
            GameOutcome::Stalemate
        };
    }
    if board.is_fifty_move_draw() {
        return GameOutcome::DrawByRule(DrawRule::FiftyMove);
    }
    if board.is_insufficient_material() {
        return GameOutcome::DrawByRule(DrawRule::InsufficientMaterial);
    }
    if in_check {
        GameOutcome::Check(us)
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
