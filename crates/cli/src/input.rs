//! Reading player commands. Moves are typed in coordinate notation (`e2e4`,
//! `e7e8q`) and resolved against the legal moves of the current board, so
//! castling, en passant and promotion flags come out right.

use chess_core::{legal_moves, Board, Move, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Moves,
    Hint,
    Undo,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("type a move like e2e4, or 'help'")]
    Empty,
    #[error("'{0}' is not a move in coordinate notation (e.g. e2e4, e7e8q)")]
    BadNotation(String),
    #[error("{0} is not a legal move here")]
    Illegal(String),
}

pub fn parse_command(board: &Board, line: &str) -> Result<Command, InputError> {
    let text = line.trim().to_ascii_lowercase();
    match text.as_str() {
        "" => Err(InputError::Empty),
        "moves" | "m" => Ok(Command::Moves),
        "hint" | "h" => Ok(Command::Hint),
        "undo" | "u" => Ok(Command::Undo),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => parse_move(board, &text).map(Command::Move),
    }
}

/// Resolve `text` to a legal move. A promotion without a piece letter
/// promotes to a queen.
pub fn parse_move(board: &Board, text: &str) -> Result<Move, InputError> {
    let bad = || InputError::BadNotation(text.to_string());
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(bad());
    }
    let from: Square = text[0..2].parse().map_err(|_| bad())?;
    let to: Square = text[2..4].parse().map_err(|_| bad())?;
    let promo = match text[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(bad()),
        },
    };

    // promotions are generated queen first
    legal_moves(board)
        .into_iter()
        .find(|m| m.from == from && m.to == to && (promo.is_none() || m.promo == promo))
        .ok_or_else(|| InputError::Illegal(text.to_string()))
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
