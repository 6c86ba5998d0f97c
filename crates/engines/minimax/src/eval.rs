//! Static evaluation: material plus mobility, capture potential and center
//! control.
//!
//! Scores are in centipawns from White's point of view. Positive favours
//! White regardless of whose turn it is.

use chess_core::{legal_moves, Board, Color, Move, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub const PIECE_VALUES: [i32; 6] = [100, 300, 300, 500, 900, 0];

/// Bound on static scores. Kept well below `MATE_SCORE - ply` so any mate
/// outranks any evaluation.
pub const MAX_EVAL: i32 = 50_000;

const CENTER: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Heuristic weights layered on top of material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per legal move of difference between the two sides.
    pub mobility_weight: i32,
    /// Per available capture of an undefended or more valuable piece.
    pub capture_bonus: i32,
    /// Per own piece standing on d4, e4, d5 or e5.
    pub center_bonus: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            mobility_weight: 5,
            capture_bonus: 10,
            center_bonus: 10,
        }
    }
}

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Evaluate with [`EvalWeights::default`].
pub fn evaluate(board: &Board) -> i32 {
    evaluate_with(board, &EvalWeights::default())
}

/// Weights can be arbitrarily large, so terms saturate and the total is
/// clamped to `±MAX_EVAL`.
pub fn evaluate_with(board: &Board, weights: &EvalWeights) -> i32 {
    let mut score = material(board);

    for (sq, pc) in board.pieces() {
        if CENTER.contains(&sq) {
            score = score.saturating_add(sign(pc.color).saturating_mul(weights.center_bonus));
        }
    }

    for color in [Color::White, Color::Black] {
        let view = board.with_side_to_move(color);
        let moves = legal_moves(&view);
        let captures = moves
            .iter()
            .filter(|&&mv| is_promising_capture(&view, mv))
            .count() as i32;
        let activity = weights
            .mobility_weight
            .saturating_mul(moves.len() as i32)
            .saturating_add(weights.capture_bonus.saturating_mul(captures));
        score = score.saturating_add(sign(color).saturating_mul(activity));
    }

    score.clamp(-MAX_EVAL, MAX_EVAL)
}

/// White's material minus Black's.
pub fn material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, pc)| sign(pc.color) * piece_value(pc.kind))
        .sum()
}

#[inline]
fn sign(c: Color) -> i32 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// A capture whose victim is undefended or worth more than the attacker.
fn is_promising_capture(board: &Board, mv: Move) -> bool {
    if !mv.is_capture() {
        return false;
    }
    let Some(attacker) = board.piece_at(mv.from) else {
        return false;
    };
    let victim = if mv.is_en_passant() {
        PieceKind::Pawn
    } else {
        match board.piece_at(mv.to) {
            // only seen in the off-turn view of a side already in check
            Some(pc) if pc.kind == PieceKind::King => return false,
            Some(pc) => pc.kind,
            None => return false,
        }
    };
    let defended = board.is_square_attacked(mv.to, attacker.color.other());
    !defended || piece_value(victim) > piece_value(attacker.kind)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
