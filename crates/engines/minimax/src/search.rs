//! Fixed-depth minimax. White maximises, Black minimises, and every score
//! is White-positive, so no sign flipping happens between plies.

use std::fmt;

use chess_core::{legal_moves_into, Board, Color, Move};

use crate::eval::{evaluate_with, EvalWeights};

/// Base score of a checkmate. A mate found `ply` half-moves from the root
/// scores `MATE_SCORE - ply`, so shorter mates are preferred.
pub const MATE_SCORE: i32 = 100_000;

const INF: i32 = MATE_SCORE + 1;

/// A root move together with the score the search gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

impl fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.mv, self.score)
    }
}

/// Score of a position with no legal moves for the side to move.
pub fn terminal_score(board: &Board, ply: u8) -> i32 {
    let us = board.side_to_move;
    if !board.in_check(us) {
        return 0;
    }
    let mate = MATE_SCORE - ply as i32;
    match us {
        Color::White => -mate,
        Color::Black => mate,
    }
}

/// Is `a` strictly better than `b` for `side`?
#[inline]
pub fn better_for(side: Color, a: i32, b: i32) -> bool {
    match side {
        Color::White => a > b,
        Color::Black => a < b,
    }
}

pub(crate) struct Searcher<'w> {
    weights: &'w EvalWeights,
    alpha_beta: bool,
    pub(crate) nodes: u64,
}

impl<'w> Searcher<'w> {
    pub(crate) fn new(weights: &'w EvalWeights, alpha_beta: bool) -> Self {
        Self {
            weights,
            alpha_beta,
            nodes: 0,
        }
    }

    /// Pick the best root move. Ties keep the earliest move in generation
    /// order. Returns `None` when the root has no legal moves.
    pub(crate) fn best_move(&mut self, root: &Board, depth: u8) -> Option<ScoredMove> {
        let mut board = root.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut board, &mut moves);
        self.nodes += 1;

        let side = board.side_to_move;
        let mut best: Option<ScoredMove> = None;
        for mv in moves {
            // children that cannot beat `best` may come back as bounds
            let (alpha, beta) = match (best, side) {
                (Some(b), Color::White) if self.alpha_beta => (b.score, INF),
                (Some(b), Color::Black) if self.alpha_beta => (-INF, b.score),
                _ => (-INF, INF),
            };
            let undo = board.make_move(mv);
            let score = self.minimax(&mut board, depth.saturating_sub(1), 1, alpha, beta);
            board.unmake_move(mv, undo);

            if best.is_none_or(|b| better_for(side, score, b.score)) {
                best = Some(ScoredMove { mv, score });
            }
        }
        best
    }

    /// Exact score of every root move, in generation order.
    pub(crate) fn score_all(&mut self, root: &Board, depth: u8) -> Vec<ScoredMove> {
        let mut board = root.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut board, &mut moves);
        self.nodes += 1;

        moves
            .into_iter()
            .map(|mv| {
                let undo = board.make_move(mv);
                let score = self.minimax(&mut board, depth.saturating_sub(1), 1, -INF, INF);
                board.unmake_move(mv, undo);
                ScoredMove { mv, score }
            })
            .collect()
    }

    fn minimax(&mut self, board: &mut Board, depth: u8, ply: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        let mut moves = Vec::with_capacity(64);
        legal_moves_into(board, &mut moves);
        if moves.is_empty() {
            return terminal_score(board, ply);
        }
        if depth == 0 {
            return evaluate_with(board, self.weights);
        }

        let side = board.side_to_move;
        let mut best = match side {
            Color::White => -INF,
            Color::Black => INF,
        };
        for mv in moves {
            let undo = board.make_move(mv);
            let score = self.minimax(board, depth - 1, ply + 1, alpha, beta);
            board.unmake_move(mv, undo);

            if better_for(side, score, best) {
                best = score;
            }
            if self.alpha_beta {
                match side {
                    Color::White => alpha = alpha.max(best),
                    Color::Black => beta = beta.min(best),
                }
                if alpha >= beta {
                    break;
                }
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
