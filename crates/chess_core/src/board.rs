use std::fmt;

use tracing::warn;

use crate::error::{ChessError, ChessResult};
use crate::movegen::legal_moves;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    /// Drop whatever right is tied to a rook standing on `corner`.
    fn revoke_corner(&mut self, corner: Square) {
        match corner {
            Square::A1 => self.wq = false,
            Square::H1 => self.wk = false,
            Square::A8 => self.bq = false,
            Square::H8 => self.bk = false,
            _ => {}
        }
    }
}

/// Full game position: piece placement plus all state the rules depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square behind a pawn that just advanced two squares.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything `unmake_move` needs to restore the board exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(Square, Square)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<Square>,      // square actually captured in en-passant
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position.
    pub fn new_game() -> Self {
        let mut b = Board::empty();
        b.castling = CastlingRights::ALL;
        for (f, &kind) in BACK_RANK.iter().enumerate() {
            let f = f as u8;
            b.squares[(8 + f) as usize] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[(48 + f) as usize] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.squares[f as usize] = Some(Piece::new(Color::White, kind));
            b.squares[(56 + f) as usize] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    pub fn startpos() -> Self {
        Self::new_game()
    }

    /// Parse a Forsyth-Edwards Notation string. The move counters are
    /// optional and default to `0 1`.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(ChessError::fen("expected at least 4 fields"));
        }

        let mut b = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::fen("board section must have 8 ranks"));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch)
                        .ok_or_else(|| ChessError::fen(format!("invalid piece char '{ch}'")))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let sq = Square::try_new(file, rank)
                        .ok_or_else(|| ChessError::fen(format!("too many files in rank {}", rank + 1)))?;
                    b.squares[sq.index()] = Some(Piece::new(color, kind));
                    file += 1;
                }
                if file > 8 {
                    return Err(ChessError::fen(format!("too many files in rank {}", rank + 1)));
                }
            }
            if file != 8 {
                return Err(ChessError::fen(format!("not enough files in rank {}", rank + 1)));
            }
        }

        b.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ChessError::fen(format!("invalid side to move '{other}'"))),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => b.castling.wk = true,
                    'Q' => b.castling.wq = true,
                    'k' => b.castling.bk = true,
                    'q' => b.castling.bq = true,
                    _ => return Err(ChessError::fen(format!("invalid castling char '{c}'"))),
                }
            }
        }

        b.en_passant = match parts[3] {
            "-" => None,
            s => Some(
                s.parse::<Square>()
                    .map_err(|_| ChessError::fen(format!("invalid en-passant square '{s}'")))?,
            ),
        };

        if let Some(h) = parts.get(4) {
            b.halfmove_clock = h
                .parse()
                .map_err(|_| ChessError::fen(format!("invalid halfmove clock '{h}'")))?;
        }
        if let Some(f) = parts.get(5) {
            b.fullmove_number = f
                .parse()
                .map_err(|_| ChessError::fen(format!("invalid fullmove number '{f}'")))?;
        }

        for color in [Color::White, Color::Black] {
            let kings = b
                .pieces()
                .filter(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessError::fen(format!("{color} must have exactly one king, found {kings}")));
            }
        }

        let us = b.side_to_move;
        if let Some(ep) = b.en_passant {
            let ep_rank = match us {
                Color::White => 5,
                Color::Black => 2,
            };
            let pushed_pawn = ep.offset(0, -us.forward()).and_then(|s| b.piece_at(s));
            if ep.rank() != ep_rank
                || b.piece_at(ep).is_some()
                || pushed_pawn != Some(Piece::new(us.other(), PieceKind::Pawn))
            {
                return Err(ChessError::fen(format!(
                    "en-passant square {ep} does not follow a {} double pawn push",
                    us.other()
                )));
            }
        }

        // the side that just moved cannot have left its own king attacked
        if b.in_check(us.other()) {
            return Err(ChessError::fen(format!("{} is in check with {us} to move", us.other())));
        }

        Ok(b)
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Occupied squares in ascending order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Same placement with `c` to move and no en-passant target. Used to
    /// count the waiting side's moves.
    pub fn with_side_to_move(&self, c: Color) -> Board {
        let mut b = self.clone();
        if b.side_to_move != c {
            b.side_to_move = c;
            b.en_passant = None;
        }
        b
    }

    /// Whether `c`'s king is attacked.
    ///
    /// # Panics
    /// If `c` has no king; that can only happen through a bug in move
    /// application, since boards are only built by `new_game` and `from_fen`.
    pub fn in_check(&self, c: Color) -> bool {
        let Some(ksq) = self.king_sq(c) else {
            panic!("board invariant violated: no {c} king\n{self}");
        };
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let holds = |s: Option<Square>, kind: PieceKind| {
            s.and_then(|s| self.piece_at(s))
                .is_some_and(|pc| pc.color == by && pc.kind == kind)
        };

        // A pawn of `by` attacks target from one rank behind it (relative to `by`).
        let back = -by.forward();
        if holds(target.offset(-1, back), PieceKind::Pawn)
            || holds(target.offset(1, back), PieceKind::Pawn)
        {
            return true;
        }

        if KNIGHT_DELTAS
            .iter()
            .any(|&(df, dr)| holds(target.offset(df, dr), PieceKind::Knight))
        {
            return true;
        }

        if KING_DELTAS
            .iter()
            .any(|&(df, dr)| holds(target.offset(df, dr), PieceKind::King))
        {
            return true;
        }

        let slider_hit = |dirs: &[(i8, i8)], kind: PieceKind| {
            dirs.iter().any(|&(df, dr)| {
                let mut cur = target.offset(df, dr);
                while let Some(s) = cur {
                    if let Some(pc) = self.piece_at(s) {
                        return pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen);
                    }
                    cur = s.offset(df, dr);
                }
                false
            })
        };

        slider_hit(&DIAGONALS, PieceKind::Bishop) || slider_hit(&ORTHOGONALS, PieceKind::Rook)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// K vs K, K+minor vs K, and K+B vs K+B with same-coloured bishops.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Square, Piece)> = Vec::with_capacity(2);
        for (sq, pc) in self.pieces() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => {
                    if minors.len() == 2 {
                        return false;
                    }
                    minors.push((sq, pc));
                }
                _ => return false,
            }
        }
        match minors.as_slice() {
            [] | [_] => true,
            [(s1, p1), (s2, p2)] => {
                p1.kind == PieceKind::Bishop
                    && p2.kind == PieceKind::Bishop
                    && p1.color != p2.color
                    && s1.is_dark() == s2.is_dark()
            }
            _ => false,
        }
    }

    /// Apply `mv` to a copy of the board after checking it is legal here.
    pub fn apply(&self, mv: Move) -> ChessResult<Board> {
        let mut next = self.clone();
        next.apply_in_place(mv)?;
        Ok(next)
    }

    /// Apply `mv` in place after checking it is legal here. The board is left
    /// untouched on error.
    pub fn apply_in_place(&mut self, mv: Move) -> ChessResult<Undo> {
        let owns_origin = self
            .piece_at(mv.from)
            .is_some_and(|pc| pc.color == self.side_to_move);
        if !owns_origin || !legal_moves(self).contains(&mv) {
            warn!(%mv, side = %self.side_to_move, "rejected illegal move");
            return Err(ChessError::IllegalMove { mv });
        }
        Ok(self.make_move(mv))
    }

    /// Play a move produced by the move generator for this exact board.
    /// No legality check; pair with [`Board::unmake_move`].
    ///
    /// # Panics
    /// If the origin square is empty.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let Some(moved) = self.piece_at(from) else {
            panic!("make_move {mv}: no piece on {from}");
        };
        let mut captured = self.piece_at(to);
        let prev_castling = self.castling;
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        // Halfmove clock reset on capture or pawn move
        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        let mut ep_captured_sq = None;
        if mv.is_en_passant()
            && let Some(cs) = to.offset(0, -moved.color.forward())
        {
            captured = self.piece_at(cs);
            self.set_piece(cs, None);
            ep_captured_sq = Some(cs);
            reset_hmc = true;
        }

        self.set_piece(from, None);
        let placed = match mv.promo {
            Some(kind) => Piece::new(moved.color, kind),
            None => moved,
        };
        self.set_piece(to, Some(placed));

        let mut rook_move = None;
        if mv.is_castle()
            && moved.kind == PieceKind::King
            && let Some((rf, rt)) = castle_rook_squares(to)
            && let Some(rook) = self.piece_at(rf)
        {
            self.set_piece(rf, None);
            self.set_piece(rt, Some(rook));
            rook_move = Some((rf, rt));
        }

        if moved.kind == PieceKind::King {
            match moved.color {
                Color::White => {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                Color::Black => {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
            }
        }
        if moved.kind == PieceKind::Rook {
            self.castling.revoke_corner(from);
        }
        // A rook captured on its home corner takes its right with it.
        if captured.is_some_and(|cp| cp.kind == PieceKind::Rook) {
            self.castling.revoke_corner(to);
        }

        if moved.kind == PieceKind::Pawn && (to.rank() - from.rank()).abs() == 2 {
            self.en_passant = from.offset(0, moved.color.forward());
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // moved_piece is the pre-promotion piece, so this also reverts promotions
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));

        match undo.ep_captured_sq {
            Some(cs) => self.set_piece(cs, undo.captured),
            None => self.set_piece(mv.to, undo.captured),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Diagram with rank 8 on top, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .filter_map(|file| Square::try_new(file, rank))
                .map(|sq| self.piece_at(sq).map_or('.', Piece::to_char).to_string())
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Rook relocation for a castling king landing on `king_to`.
fn castle_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        Square::G1 => Some((Square::H1, Square::F1)),
        Square::C1 => Some((Square::A1, Square::D1)),
        Square::G8 => Some((Square::H8, Square::F8)),
        Square::C8 => Some((Square::A8, Square::D8)),
        _ => None,
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
