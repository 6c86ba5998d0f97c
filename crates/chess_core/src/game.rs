//! A game in progress: the current board plus what it takes to undo moves
//! and spot repetitions.

use tracing::debug;

use crate::board::{Board, Undo};
use crate::error::ChessResult;
use crate::outcome::{DrawRule, GameOutcome, outcome};
use crate::types::Move;
use crate::zobrist::position_key;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Played moves with their undo records, oldest first.
    moves: Vec<(Move, Undo)>,
    /// Key of every position reached, including the starting one.
    position_history: Vec<u64>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new_game())
    }

    pub fn from_board(board: Board) -> Self {
        let key = position_key(&board);
        Self {
            board,
            moves: Vec::new(),
            position_history: vec![key],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().map(|(mv, _)| *mv)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().map(|(mv, _)| *mv)
    }

    /// Validate and play `mv`, returning the outcome of the new position.
    pub fn play(&mut self, mv: Move) -> ChessResult<GameOutcome> {
        let undo = self.board.apply_in_place(mv)?;
        self.moves.push((mv, undo));
        self.position_history.push(position_key(&self.board));
        let result = self.outcome();
        debug!(%mv, ply = self.moves.len(), outcome = %result, "move played");
        Ok(result)
    }

    /// Take back the last move. Returns `None` at the start of the game.
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, undo) = self.moves.pop()?;
        self.board.unmake_move(mv, undo);
        self.position_history.pop();
        Some(mv)
    }

    /// How many times the current position has occurred so far, counting now.
    pub fn repetition_count(&self) -> usize {
        let Some(&current) = self.position_history.last() else {
            return 0;
        };
        self.position_history.iter().filter(|&&k| k == current).count()
    }

    /// [`outcome`] of the current board, plus threefold repetition.
    pub fn outcome(&self) -> GameOutcome {
        let base = outcome(&self.board);
        if !base.is_over() && self.repetition_count() >= 3 {
            return GameOutcome::DrawByRule(DrawRule::ThreefoldRepetition);
        }
        base
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
