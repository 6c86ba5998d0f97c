//! The interactive game loop.

use std::io::{BufRead, Write};

use chess_core::{legal_moves, Board, Color, Engine, Game, GameOutcome};
use minimax_engine::MinimaxEngine;
use strategy::Strategy;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::input::{parse_command, Command};

const HINTS_SHOWN: usize = 3;

const HELP: &str = "\
Commands:
  e2e4, e7e8q   play a move in coordinate notation
  moves         list the legal moves
  hint          show the best moves by minimax search
  undo          take back your last move
  quit          leave the game";

pub struct Session {
    game: Game,
    computer: Option<Color>,
    strategy: Strategy,
    advisor: MinimaxEngine,
}

impl Session {
    pub fn new(config: &GameConfig, board: Board) -> Self {
        Self {
            game: Game::from_board(board),
            computer: config.computer(),
            strategy: config.strategy(),
            advisor: MinimaxEngine::new(config.minimax_config()),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn computer_to_move(&self) -> bool {
        self.computer == Some(self.game.board().side_to_move)
    }

    /// Play until the game ends, the player quits or input runs out.
    /// Returns the outcome of the final position.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> anyhow::Result<GameOutcome> {
        self.strategy.new_game();
        if let Some(side) = self.computer {
            writeln!(out, "{} plays {side}.", self.strategy.name())?;
        }
        writeln!(out, "Type 'help' for commands.")?;

        loop {
            let outcome = self.game.outcome();
            writeln!(out, "\n{}", self.game.board())?;
            if outcome.is_over() {
                writeln!(out, "Game over: {outcome}.")?;
                info!(%outcome, plies = self.game.moves().count(), "game over");
                return Ok(outcome);
            }
            if let GameOutcome::Check(side) = outcome {
                writeln!(out, "{side} is in check.")?;
            }

            if self.computer_to_move() {
                let mv = self.strategy.select_move(self.game.board())?;
                writeln!(out, "{} plays {mv}", self.strategy.name())?;
                self.game.play(mv)?;
                continue;
            }

            write!(out, "{} to move> ", self.game.board().side_to_move)?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                debug!("input closed");
                return Ok(outcome);
            }

            match parse_command(self.game.board(), &line) {
                Ok(Command::Move(mv)) => {
                    self.game.play(mv)?;
                }
                Ok(Command::Moves) => self.list_moves(&mut out)?,
                Ok(Command::Hint) => self.hint(&mut out)?,
                Ok(Command::Undo) => self.undo(&mut out)?,
                Ok(Command::Help) => writeln!(out, "{HELP}")?,
                Ok(Command::Quit) => return Ok(outcome),
                Err(e) => writeln!(out, "{e}")?,
            }
        }
    }

    fn list_moves<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let moves: Vec<String> = legal_moves(self.game.board())
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(out, "{} legal moves: {}", moves.len(), moves.join(" "))?;
        Ok(())
    }

    fn hint<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let ranked = self.advisor.rank_moves(self.game.board());
        let best: Vec<String> = ranked
            .iter()
            .take(HINTS_SHOWN)
            .map(ToString::to_string)
            .collect();
        writeln!(out, "Best moves: {}", best.join(", "))?;
        Ok(())
    }

    /// Take back moves until it is a human's turn again.
    fn undo<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let Some(mv) = self.game.undo() else {
            writeln!(out, "Nothing to undo.")?;
            return Ok(());
        };
        let mut taken = vec![mv.to_string()];
        while self.computer_to_move() {
            match self.game.undo() {
                Some(mv) => taken.push(mv.to_string()),
                None => break,
            }
        }
        writeln!(out, "Took back {}.", taken.join(", "))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "play_tests.rs"]
mod play_tests;
