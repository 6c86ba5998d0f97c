//! Zobrist keys identifying positions for repetition detection.
//!
//! A key is the XOR of one random value per:
//! - piece on a square (12 pieces x 64 squares)
//! - side to move (Black only)
//! - held castling right
//! - en-passant file, when a target is set
//!
//! Two boards that differ only in their move counters share a key, which is
//! exactly what "same position" means for the threefold rule.

use crate::board::Board;
use crate::types::{Color, Piece, Square};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
}

impl ZobristKeys {
    /// Fill the tables from a fixed-seed xorshift64 stream so keys are stable
    /// across runs and builds.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E37_79B9_7F4A_7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let black_to_move = state;

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            state = xorshift64(state);
            castling[i] = state;
            i += 1;
        }

        let mut en_passant = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            state = xorshift64(state);
            en_passant[i] = state;
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq.index()]
    }

    /// Full key of `board`, computed from scratch.
    pub fn position_key(&self, board: &Board) -> u64 {
        let mut h = board
            .pieces()
            .fold(0u64, |h, (sq, pc)| h ^ self.piece_key(pc, sq));
        if board.side_to_move == Color::Black {
            h ^= self.black_to_move;
        }
        let rights = [
            board.castling.wk,
            board.castling.wq,
            board.castling.bk,
            board.castling.bq,
        ];
        for (held, key) in rights.iter().zip(self.castling) {
            if *held {
                h ^= key;
            }
        }
        if let Some(ep) = board.en_passant {
            h ^= self.en_passant[ep.file() as usize];
        }
        h
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// Shorthand for `ZOBRIST.position_key(board)`.
pub fn position_key(board: &Board) -> u64 {
    ZOBRIST.position_key(board)
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
